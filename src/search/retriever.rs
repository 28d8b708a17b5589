//! Boosted similarity retrieval over corpus questions.
//!
//! Cosine scores from the TF-IDF index are boosted by content-token overlap
//! and by the query appearing verbatim inside a question, then compared
//! against a confidence threshold.

use super::tfidf_index::TfIdfIndex;
use crate::matching::contains_phrase;
use crate::models::QaPair;
use crate::text::{content_tokens, normalize};
use std::collections::HashSet;

/// Weight of the fraction of query terms found in the question.
pub const OVERLAP_BOOST: f64 = 0.15;

/// Added when the whole query appears inside the question.
pub const PHRASE_BOOST: f64 = 0.10;

/// Best corpus entry for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalMatch {
    /// Position of the pair in the corpus
    pub index: usize,

    /// Matched question
    pub question: String,

    /// Answer for the matched question
    pub answer: String,

    /// Boosted score (0.0-1.0)
    pub score: f64,

    /// Cosine similarity before boosting
    pub raw_score: f64,
}

/// Per-question data kept next to the index.
#[derive(Debug, Clone)]
struct IndexedQuestion {
    pair: QaPair,
    normalized: String,
    terms: HashSet<String>,
}

/// TF-IDF retriever over the questions of a Q&A corpus.
#[derive(Debug, Clone, Default)]
pub struct SimilarityRetriever {
    index: TfIdfIndex,
    questions: Vec<IndexedQuestion>,
}

impl SimilarityRetriever {
    /// Index the questions of a corpus.
    pub fn new(corpus: &[QaPair]) -> Self {
        let questions: Vec<IndexedQuestion> = corpus
            .iter()
            .map(|pair| {
                let normalized = normalize(&pair.question);
                let terms = content_tokens(&normalized).into_iter().collect();
                IndexedQuestion {
                    pair: pair.clone(),
                    normalized,
                    terms,
                }
            })
            .collect();

        let documents: Vec<&str> = questions.iter().map(|q| q.normalized.as_str()).collect();
        let index = TfIdfIndex::build(&documents);

        tracing::debug!(
            documents = index.document_count(),
            vocabulary = index.vocabulary_size(),
            "Similarity index built"
        );

        Self { index, questions }
    }

    /// Find the best question for a normalized query.
    ///
    /// Returns `None` if the query has no content terms, nothing overlaps,
    /// or the best boosted score is below `threshold`.
    pub fn best_match(&self, normalized: &str, threshold: f64) -> Option<RetrievalMatch> {
        let query_terms: HashSet<String> = content_tokens(normalized).into_iter().collect();
        if query_terms.is_empty() {
            return None;
        }
        let phrase_eligible = normalized.split_whitespace().count() >= 2;

        let mut best: Option<RetrievalMatch> = None;

        for scored in self.index.rank(normalized) {
            let question = &self.questions[scored.index];
            let boosted = boost(
                scored.score,
                &query_terms,
                question,
                normalized,
                phrase_eligible,
            );

            // Candidates arrive in cosine order, so ties fall back to corpus order
            let better = best.as_ref().map_or(true, |b| {
                boosted > b.score || (boosted == b.score && scored.index < b.index)
            });
            if better {
                best = Some(RetrievalMatch {
                    index: scored.index,
                    question: question.pair.question.clone(),
                    answer: question.pair.answer.clone(),
                    score: boosted,
                    raw_score: scored.score,
                });
            }
        }

        match best {
            Some(m) if m.score >= threshold => Some(m),
            Some(m) => {
                tracing::debug!(
                    score = m.score,
                    threshold = threshold,
                    question = %m.question,
                    "Best similarity match below threshold"
                );
                None
            }
            None => None,
        }
    }

    /// Number of indexed questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Apply overlap and phrase boosts to a cosine score, capped at 1.0.
fn boost(
    cosine: f64,
    query_terms: &HashSet<String>,
    question: &IndexedQuestion,
    normalized_query: &str,
    phrase_eligible: bool,
) -> f64 {
    let shared = query_terms.intersection(&question.terms).count();
    let overlap = shared as f64 / query_terms.len() as f64;

    let mut score = cosine + OVERLAP_BOOST * overlap;
    if phrase_eligible && contains_phrase(&question.normalized, normalized_query) {
        score += PHRASE_BOOST;
    }

    score.min(1.0)
}
