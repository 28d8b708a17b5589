//! The college chatbot's retrieval pipeline.
//!
//! A `ChatEngine` is an immutable snapshot built from a corpus, a rule set
//! and a threshold. Each message is answered by the first stage that
//! produces a reply:
//!
//! 1. empty input after normalization
//! 2. exact-match dictionaries (small talk, then corpus questions)
//! 3. ordered keyword intent rules
//! 4. TF-IDF similarity above the threshold
//! 5. fallback

use crate::matching::{ExactKind, ExactMatcher, RuleSet};
use crate::models::{ChatReply, QaPair, ReplySource};
use crate::search::SimilarityRetriever;
use crate::text::normalize;

/// Reply for messages with no words.
pub const EMPTY_REPLY: &str = "Please type a question so I can help you.";

/// Reply when no stage matched.
pub const FALLBACK_REPLY: &str =
    "Sorry, I didn't understand. Type 'help' to see what you can ask me.";

/// Immutable matching pipeline over one corpus.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    exact: ExactMatcher,
    rules: RuleSet,
    retriever: SimilarityRetriever,
    threshold: f64,
    corpus_len: usize,
}

impl ChatEngine {
    /// Build an engine for a corpus.
    ///
    /// `threshold` is the minimum boosted similarity score (0.0-1.0) for a
    /// TF-IDF answer.
    pub fn new(corpus: &[QaPair], rules: RuleSet, threshold: f64) -> Self {
        Self {
            exact: ExactMatcher::with_corpus(corpus),
            rules,
            retriever: SimilarityRetriever::new(corpus),
            threshold,
            corpus_len: corpus.len(),
        }
    }

    /// Answer one message.
    pub fn respond(&self, message: &str) -> ChatReply {
        self.respond_normalized(&normalize(message))
    }

    /// Answer an already-normalized message.
    pub fn respond_normalized(&self, normalized: &str) -> ChatReply {
        if normalized.is_empty() {
            return ChatReply {
                reply: EMPTY_REPLY.to_string(),
                source: ReplySource::Empty,
                confidence: 0.0,
                intent: None,
                matched_question: None,
            };
        }

        if let Some(hit) = self.exact.lookup(normalized) {
            let source = match hit.kind {
                ExactKind::SmallTalk => ReplySource::SmallTalk,
                ExactKind::Corpus => ReplySource::Exact,
            };
            tracing::debug!(source = source.as_str(), "Exact match");
            return ChatReply {
                reply: hit.reply.to_string(),
                source,
                confidence: 1.0,
                intent: None,
                matched_question: hit.question.map(str::to_string),
            };
        }

        if let Some(rule) = self.rules.evaluate(normalized) {
            tracing::debug!(intent = %rule.name, "Intent rule matched");
            return ChatReply {
                reply: rule.reply.clone(),
                source: ReplySource::Rule,
                confidence: 1.0,
                intent: Some(rule.name.clone()),
                matched_question: None,
            };
        }

        if let Some(m) = self.retriever.best_match(normalized, self.threshold) {
            tracing::debug!(
                score = m.score,
                raw_score = m.raw_score,
                question = %m.question,
                "Similarity match"
            );
            return ChatReply {
                reply: m.answer,
                source: ReplySource::Similarity,
                confidence: m.score,
                intent: None,
                matched_question: Some(m.question),
            };
        }

        tracing::debug!("No match, using fallback reply");
        ChatReply {
            reply: FALLBACK_REPLY.to_string(),
            source: ReplySource::Fallback,
            confidence: 0.0,
            intent: None,
            matched_question: None,
        }
    }

    /// Whether a question (raw text) is already in the corpus.
    pub fn has_question(&self, question: &str) -> bool {
        self.exact.contains_question(&normalize(question))
    }

    /// Number of corpus pairs the engine was built from.
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Similarity threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{default_rules, IntentRule, KeywordMode};

    fn corpus() -> Vec<QaPair> {
        vec![
            QaPair::new("Is there a canteen on campus?", "Canteen answer"),
            QaPair::new("Is wifi available for students?", "Wifi answer"),
            QaPair::new("What is the hostel curfew?", "Curfew answer"),
        ]
    }

    fn engine() -> ChatEngine {
        ChatEngine::new(&corpus(), default_rules(), 0.3)
    }

    #[test]
    fn test_empty_message() {
        let reply = engine().respond("  ?! ");
        assert_eq!(reply.source, ReplySource::Empty);
        assert_eq!(reply.reply, EMPTY_REPLY);
    }

    #[test]
    fn test_small_talk() {
        let reply = engine().respond("Hello!");
        assert_eq!(reply.source, ReplySource::SmallTalk);
        assert_eq!(reply.confidence, 1.0);
    }

    #[test]
    fn test_exact_question_beats_rules() {
        // "hostel" would trigger the hostel rule, but the exact question wins
        let reply = engine().respond("what is the HOSTEL curfew");
        assert_eq!(reply.source, ReplySource::Exact);
        assert_eq!(reply.reply, "Curfew answer");
        assert_eq!(
            reply.matched_question.as_deref(),
            Some("What is the hostel curfew?")
        );
    }

    #[test]
    fn test_rule_beats_similarity() {
        let reply = engine().respond("hostel curfew time");
        assert_eq!(reply.source, ReplySource::Rule);
        assert_eq!(reply.intent.as_deref(), Some("hostel"));
    }

    #[test]
    fn test_similarity_fallback() {
        let reply = engine().respond("campus canteen menu");
        assert_eq!(reply.source, ReplySource::Similarity);
        assert_eq!(reply.reply, "Canteen answer");
        assert!(reply.confidence >= 0.3 && reply.confidence <= 1.0);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let reply = engine().respond("quantum chromodynamics");
        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(reply.reply, FALLBACK_REPLY);
        assert_eq!(reply.confidence, 0.0);
    }

    #[test]
    fn test_threshold_controls_similarity() {
        let strict = ChatEngine::new(&corpus(), RuleSet::default(), 1.0);
        let reply = strict.respond("canteen menu");
        assert_eq!(reply.source, ReplySource::Fallback);
    }

    #[test]
    fn test_custom_rules_in_order() {
        let rules = RuleSet::new(vec![IntentRule::new(
            "sports",
            &["cricket"],
            KeywordMode::Any,
            "Sports reply",
        )]);
        let engine = ChatEngine::new(&corpus(), rules, 0.3);
        let reply = engine.respond("is there a cricket team");
        assert_eq!(reply.source, ReplySource::Rule);
        assert_eq!(reply.reply, "Sports reply");
    }

    #[test]
    fn test_has_question() {
        let engine = engine();
        assert!(engine.has_question("IS THERE A CANTEEN ON CAMPUS"));
        assert!(!engine.has_question("is there a gym"));
        assert_eq!(engine.corpus_len(), 3);
    }
}
