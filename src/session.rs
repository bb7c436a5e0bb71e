//! Conversation history kept by the front ends.
//!
//! The answering engine never sees this history; a `Session` only records what
//! was asked and answered so a UI can show it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::answerer::QueryAnswerer;
use crate::models::Dataset;

/// One question and the answer it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The question as typed (trimmed).
    pub question: String,
    /// The engine's answer.
    pub answer: String,
    /// When the question was asked.
    #[serde(with = "time::serde::rfc3339")]
    pub asked_at: OffsetDateTime,
}

/// An ordered sequence of exchanges.
#[derive(Debug, Clone, Default)]
pub struct Session {
    exchanges: Vec<Exchange>,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `question` and records the exchange.
    ///
    /// Only the current question is passed to the engine. Blank questions are
    /// ignored and return `None`.
    pub fn ask(
        &mut self,
        answerer: &QueryAnswerer,
        question: &str,
        dataset: &Dataset,
    ) -> Option<&Exchange> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }

        let answer = answerer.answer(question, dataset);
        self.exchanges.push(Exchange {
            question: question.to_string(),
            answer,
            asked_at: OffsetDateTime::now_utc(),
        });
        self.exchanges.last()
    }

    /// Returns all exchanges, oldest first.
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    /// Returns the number of exchanges.
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// Returns true if nothing has been asked yet.
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Forgets all exchanges.
    pub fn clear(&mut self) {
        self.exchanges.clear();
    }
}
