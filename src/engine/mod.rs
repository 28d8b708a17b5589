//! Chat pipeline combining normalization, exact lookup, intent rules and
//! similarity retrieval.

pub mod chat_engine;

pub use chat_engine::{ChatEngine, EMPTY_REPLY, FALLBACK_REPLY};
