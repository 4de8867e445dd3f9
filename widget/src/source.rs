use std::time::Duration;

use tracing::debug;
use triangle_core::tutor::{answer, ChatRequest, TutorAnswer};

use crate::error::ChatError;
use crate::remote::RemoteTutor;

/// Pause before a local answer, so replies do not appear to arrive before
/// the question.
pub const LOCAL_DELAY: Duration = Duration::from_millis(500);

/// Where chat questions are answered.
#[derive(Debug, Clone)]
pub enum TutorSource {
    /// In-process tutor after a fixed delay
    Local { delay: Duration },
    /// Tutor behind `POST /chat`
    Remote(RemoteTutor),
}

impl TutorSource {
    pub fn local() -> Self {
        Self::Local { delay: LOCAL_DELAY }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self::Remote(RemoteTutor::new(base_url))
    }

    pub async fn ask(&self, request: &ChatRequest) -> Result<TutorAnswer, ChatError> {
        match self {
            Self::Local { delay } => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                debug!(query = %request.query, "answering locally");
                Ok(answer(&request.query, &request.sides, &request.angles))
            }
            Self::Remote(remote) => {
                debug!(query = %request.query, endpoint = %remote.endpoint(), "asking remote tutor");
                remote.ask(request).await
            }
        }
    }
}

impl Default for TutorSource {
    fn default() -> Self {
        Self::local()
    }
}
