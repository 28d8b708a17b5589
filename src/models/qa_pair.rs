//! Q&A pair model forming the college chatbot corpus.

use serde::{Deserialize, Serialize};

/// Bundled corpus used to seed a fresh store.
const DEFAULT_CORPUS_JSON: &str = include_str!("../../data/qa_pairs.json");

/// A question with its canned answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaPair {
    /// Question as an administrator wrote it
    pub question: String,

    /// Answer returned when the question matches
    pub answer: String,
}

impl QaPair {
    /// Create a new Q&A pair.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The bundled college corpus.
///
/// Falls back to an empty corpus if the bundled file cannot be parsed.
pub fn default_corpus() -> Vec<QaPair> {
    serde_json::from_str(DEFAULT_CORPUS_JSON).unwrap_or_else(|e| {
        tracing::error!("Bundled Q&A corpus is invalid: {}", e);
        Vec::new()
    })
}
