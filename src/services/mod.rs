//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the repository, the chat engine and the caches. They provide a clean
//! boundary between the HTTP handlers and the data access layer.

mod calendar_service;
mod chat_service;

pub use calendar_service::CalendarService;
pub use chat_service::{ChatService, ChatServiceImpl, MAX_ANSWER_LENGTH, MAX_QUESTION_LENGTH};
