use triangle_core::tutor::{ChatRequest, TutorAnswer};

use crate::error::ChatError;

/// Client for a tutor served over HTTP at `{base_url}/chat`.
#[derive(Debug, Clone)]
pub struct RemoteTutor {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteTutor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    pub async fn ask(&self, request: &ChatRequest) -> Result<TutorAnswer, ChatError> {
        let response = self.client.post(self.endpoint()).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status));
        }
        Ok(response.json().await?)
    }
}
