use tracing::{info, warn};
use triangle_core::chat::{ChatTurn, Transcript};
use triangle_core::interaction::Controller;
use triangle_core::tutor::{ChatRequest, TutorAnswer};

use crate::error::ChatError;
use crate::source::TutorSource;

/// One user's widget: the triangle they are editing and their conversation
/// with the tutor about it.
#[derive(Debug, Default)]
pub struct ChatSession {
    controller: Controller,
    transcript: Transcript,
    source: TutorSource,
}

impl ChatSession {
    pub fn new(controller: Controller, source: TutorSource) -> Self {
        Self {
            controller,
            transcript: Transcript::new(),
            source,
        }
    }

    /// Pointer and field events go through here so the controller stays the
    /// only writer of the triangle.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Ask about the triangle as it is right now.
    ///
    /// Blank questions are ignored. Failures never reach the caller: they
    /// are logged and the turn records the fallback answer instead.
    pub async fn send(&mut self, query: &str) -> Option<&ChatTurn> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let answer = match self.resolve(query).await {
            Ok(answer) => {
                info!(turn = self.transcript.len(), "tutor answered");
                answer
            }
            Err(e) => {
                warn!("Chat error: {}", e);
                TutorAnswer::fallback()
            }
        };
        Some(self.transcript.push(query, answer))
    }

    async fn resolve(&self, query: &str) -> Result<TutorAnswer, ChatError> {
        let measurements = self.controller.measurements();
        let angles = measurements.angles.ok_or(ChatError::DegenerateTriangle)?;
        let request = ChatRequest {
            query: query.to_string(),
            sides: measurements.sides,
            angles,
        };
        self.source.ask(&request).await
    }
}
