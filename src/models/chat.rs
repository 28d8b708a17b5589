//! Chat request and reply models.

use serde::{Deserialize, Serialize};

/// Which stage of the pipeline produced a reply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// Message was empty after normalization
    Empty,
    /// Greeting, thanks or farewell dictionary
    SmallTalk,
    /// Exact match on a corpus question
    Exact,
    /// Keyword intent rule
    Rule,
    /// TF-IDF similarity above threshold
    Similarity,
    /// Nothing matched
    Fallback,
}

impl ReplySource {
    /// Number of sources.
    pub const COUNT: usize = 6;

    /// All sources, in pipeline order.
    pub const ALL: [ReplySource; Self::COUNT] = [
        Self::Empty,
        Self::SmallTalk,
        Self::Exact,
        Self::Rule,
        Self::Similarity,
        Self::Fallback,
    ];

    /// Get display name for the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::SmallTalk => "small_talk",
            Self::Exact => "exact",
            Self::Rule => "rule",
            Self::Similarity => "similarity",
            Self::Fallback => "fallback",
        }
    }
}

/// A reply produced by the chat engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// Text returned to the user
    pub reply: String,

    /// Stage that produced the reply
    pub source: ReplySource,

    /// Confidence (0.0-1.0); 1.0 for dictionary and rule hits
    pub confidence: f64,

    /// Name of the intent rule that fired, for rule replies
    pub intent: Option<String>,

    /// Corpus question that matched, for exact and similarity replies
    pub matched_question: Option<String>,
}

impl ChatReply {
    /// Reply with full confidence and no match metadata.
    pub fn certain(reply: impl Into<String>, source: ReplySource) -> Self {
        Self {
            reply: reply.into(),
            source,
            confidence: 1.0,
            intent: None,
            matched_question: None,
        }
    }
}

/// Incoming chat message (for both bots).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat reply as sent to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.reply,
            source: reply.source,
            // Rounded so clients don't see float noise
            confidence: (reply.confidence * 1000.0).round() / 1000.0,
            intent: reply.intent,
            matched_question: reply.matched_question,
        }
    }
}

/// Calendar bot reply (plain text only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarReply {
    pub reply: String,
}

/// Admin request to append a Q&A pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddQaRequest {
    pub question: String,
    pub answer: String,
}

/// Result of appending a Q&A pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddQaResponse {
    pub ok: bool,
    pub total_pairs: usize,
}
