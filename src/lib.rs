//! Campus Chatbot - a college information chatbot with an academic calendar responder.
//!
//! The college bot answers free-text questions from a Q&A corpus by trying,
//! in order, exact dictionaries, keyword intent rules and TF-IDF similarity.
//! The calendar bot answers fixed keyword triggers from static data.
//!
//! # Architecture
//!
//! - **text**: Normalization and tokenization shared by every matcher
//! - **matching**: Exact-match dictionaries and keyword intent rules
//! - **search**: TF-IDF index and boosted similarity retrieval
//! - **engine**: The chat pipeline combining the matchers
//! - **calendar**: Static academic calendar responder
//! - **models**: Q&A pairs and request/response types
//! - **repositories**: Q&A persistence (JSON file)
//! - **services**: Business logic behind the HTTP handlers
//! - **cache**: Reply cache keyed by normalized message
//! - **observability**: Counters and timers
//! - **server**: axum HTTP interface
//! - **config** / **error**: Environment configuration and error types

pub mod cache;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;
pub mod text;

// Re-export commonly used types
pub use cache::ReplyCache;
pub use calendar::CalendarBot;
pub use config::Config;
pub use engine::ChatEngine;
pub use error::{ChatError, ConfigError, StoreError};
pub use matching::{default_rules, IntentRule, KeywordMode, RuleSet};
pub use models::{ChatReply, ChatRequest, ChatResponse, QaPair, ReplySource};
pub use observability::MetricsTracker;
pub use repositories::{JsonQaRepository, QaRepository};
pub use search::{SimilarityRetriever, TfIdfIndex};
pub use server::AppState;
pub use services::{CalendarService, ChatService, ChatServiceImpl};
