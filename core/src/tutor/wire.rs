//! JSON shapes exchanged with the `/chat` endpoint.

use crate::triangle::{Angles, Sides};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub sides: Sides,
    pub angles: Angles,
}

/// The tutor's reply: a one-line answer, the rule it applied and the
/// worked steps in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorAnswer {
    pub answer: String,
    pub rule: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl TutorAnswer {
    pub const FALLBACK_MESSAGE: &'static str = "Sorry, I encountered an error answering that.";

    /// Shown in place of an answer when the tutor could not be reached.
    pub fn fallback() -> Self {
        Self {
            answer: Self::FALLBACK_MESSAGE.to_string(),
            rule: String::new(),
            steps: Vec::new(),
        }
    }
}
