//! Caching utilities for chat replies.
//!
//! This module provides a TTL cache keyed by normalized message text.

pub mod reply_cache;

pub use reply_cache::ReplyCache;
