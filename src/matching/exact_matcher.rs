//! Exact-match dictionaries.
//!
//! Small talk is checked first, then corpus questions. All keys are stored
//! normalized, so callers look up with normalized text.

use crate::models::QaPair;
use crate::text::normalize;
use std::collections::HashMap;

const GREETING_REPLY: &str = "Hello, how can I help you!";
const THANKS_REPLY: &str = "You're welcome! Ask me anything else about the college.";
const FAREWELL_REPLY: &str = "Goodbye! Come back if you have more questions.";

/// Built-in small talk entries: (phrase, reply).
const SMALL_TALK: &[(&str, &str)] = &[
    ("hi", GREETING_REPLY),
    ("hello", GREETING_REPLY),
    ("hai", GREETING_REPLY),
    ("hey", GREETING_REPLY),
    ("hi there", GREETING_REPLY),
    ("hello there", GREETING_REPLY),
    ("good morning", GREETING_REPLY),
    ("good afternoon", GREETING_REPLY),
    ("good evening", GREETING_REPLY),
    ("thanks", THANKS_REPLY),
    ("thank you", THANKS_REPLY),
    ("thank you so much", THANKS_REPLY),
    ("thanks a lot", THANKS_REPLY),
    ("bye", FAREWELL_REPLY),
    ("goodbye", FAREWELL_REPLY),
    ("see you", FAREWELL_REPLY),
];

/// Which dictionary produced an exact hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactKind {
    /// Greeting, thanks or farewell
    SmallTalk,
    /// Corpus question
    Corpus,
}

/// An exact dictionary hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactHit<'a> {
    pub kind: ExactKind,
    pub reply: &'a str,
    /// Original corpus question (corpus hits only)
    pub question: Option<&'a str>,
}

/// Exact lookup over normalized keys.
#[derive(Debug, Clone, Default)]
pub struct ExactMatcher {
    small_talk: HashMap<String, String>,
    corpus: HashMap<String, (String, String)>,
}

impl ExactMatcher {
    /// Create a matcher with the built-in small talk and no corpus entries.
    pub fn new() -> Self {
        let mut matcher = Self::default();
        for (phrase, reply) in SMALL_TALK {
            matcher.add_small_talk(phrase, reply);
        }
        matcher
    }

    /// Create a matcher with built-in small talk plus the given corpus.
    pub fn with_corpus(corpus: &[QaPair]) -> Self {
        let mut matcher = Self::new();
        for pair in corpus {
            matcher.add_pair(pair);
        }
        matcher
    }

    /// Add (or replace) a small talk phrase.
    pub fn add_small_talk(&mut self, phrase: &str, reply: &str) {
        let key = normalize(phrase);
        if !key.is_empty() {
            self.small_talk.insert(key, reply.to_string());
        }
    }

    /// Add a corpus pair keyed by its normalized question.
    ///
    /// Returns false if the key is empty or already taken.
    pub fn add_pair(&mut self, pair: &QaPair) -> bool {
        let key = normalize(&pair.question);
        if key.is_empty() || self.corpus.contains_key(&key) {
            return false;
        }
        self.corpus
            .insert(key, (pair.question.clone(), pair.answer.clone()));
        true
    }

    /// Look up a normalized message.
    pub fn lookup(&self, normalized: &str) -> Option<ExactHit<'_>> {
        if let Some(reply) = self.small_talk.get(normalized) {
            return Some(ExactHit {
                kind: ExactKind::SmallTalk,
                reply,
                question: None,
            });
        }

        self.corpus
            .get(normalized)
            .map(|(question, answer)| ExactHit {
                kind: ExactKind::Corpus,
                reply: answer,
                question: Some(question),
            })
    }

    /// Whether a normalized question is already in the corpus dictionary.
    pub fn contains_question(&self, normalized: &str) -> bool {
        self.corpus.contains_key(normalized)
    }

    /// Number of corpus entries.
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }
}
