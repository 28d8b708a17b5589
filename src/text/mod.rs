//! Text normalization and tokenization.
//!
//! Every matcher in the crate compares normalized text, so user input and
//! corpus entries go through the same functions here.

pub mod normalizer;

pub use normalizer::{content_tokens, is_stop_word, normalize, tokenize};
