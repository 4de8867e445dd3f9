//! Append-only chat transcript.

use crate::tutor::TutorAnswer;
use serde::{Deserialize, Serialize};

/// One question and the tutor's reply to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub query: String,
    pub answer: TutorAnswer,
}

/// Ordered conversation history. Turns can be appended and read, never
/// edited or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, query: impl Into<String>, answer: TutorAnswer) -> &ChatTurn {
        self.turns.push(ChatTurn {
            query: query.into(),
            answer,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
