//! Exact and keyword matching for chat messages.
//!
//! This module provides the first two stages of the chat pipeline: exact
//! dictionary lookup and ordered keyword intent rules.

pub mod exact_matcher;
pub mod intent_rules;

pub use exact_matcher::{ExactHit, ExactKind, ExactMatcher};
pub use intent_rules::{contains_phrase, default_rules, IntentRule, KeywordMode, RuleSet};
