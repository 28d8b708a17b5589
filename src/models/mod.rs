//! Data models for the chatbot.
//!
//! This module contains the Q&A corpus entries and the request/response
//! shapes exchanged with clients.

pub mod chat;
pub mod qa_pair;

pub use chat::{
    AddQaRequest, AddQaResponse, CalendarReply, ChatReply, ChatRequest, ChatResponse, ReplySource,
};
pub use qa_pair::{default_corpus, QaPair};
