//! Academic calendar responder.
//!
//! A keyword-triggered bot answering questions about academic dates, exams,
//! fees, holidays and day orders from static data.

pub mod calendar_bot;
pub mod data;

pub use calendar_bot::{next_working_day, CalendarBot, GREETING_REPLY, UNKNOWN_REPLY};
