//! Input normalization for matching.
//!
//! Normalized text is lowercase, has no punctuation, and has single spaces
//! between words.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static APOSTROPHE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['’]").expect("Failed to compile apostrophe regex"));

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("Failed to compile punctuation regex"));

/// Words ignored when building term vectors.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "am", "an", "and", "any", "are", "as", "at", "be", "by", "can", "could",
        "do", "does", "for", "from", "give", "have", "how", "i", "in", "is", "it", "its", "know",
        "let", "me", "my", "of", "on", "or", "please", "our", "say", "so", "tell", "that", "the",
        "there", "this", "to", "u", "us", "want", "was", "we", "what", "whats", "when", "which",
        "who", "whom", "why", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Normalize raw user input for matching.
///
/// Lowercases, deletes apostrophes, turns any other punctuation into a space,
/// and collapses whitespace.
pub fn normalize(input: &str) -> String {
    let lower = input.to_lowercase();
    let without_apostrophes = APOSTROPHE_RE.replace_all(&lower, "");
    let spaced = NON_WORD_RE.replace_all(&without_apostrophes, " ");

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into tokens.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

/// Tokens of normalized text with stop words removed.
pub fn content_tokens(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Whether a token is on the stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}
