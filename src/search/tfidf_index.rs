//! TF-IDF vector-space index.
//!
//! Documents are normalized texts. Terms are their content tokens (stop words
//! removed). Vectors are sparse, sorted by term id, and L2-normalized.

use crate::text::content_tokens;
use std::collections::HashMap;

/// Sparse vector: (term id, weight) pairs sorted by term id.
pub type SparseVector = Vec<(usize, f64)>;

/// A document index with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    /// Position of the document in the indexed collection
    pub index: usize,

    /// Cosine similarity to the query (0.0-1.0)
    pub score: f64,
}

/// TF-IDF index over a fixed document collection.
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    /// Term to term id
    vocabulary: HashMap<String, usize>,

    /// Smoothed inverse document frequency per term id
    idf: Vec<f64>,

    /// Normalized document vectors
    vectors: Vec<SparseVector>,
}

impl TfIdfIndex {
    /// Build an index from normalized document texts.
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| content_tokens(doc.as_ref()))
            .collect();

        // Assign term ids in first-seen order and count document frequency
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let mut seen_in_doc: Vec<usize> = Vec::new();
            for token in tokens {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token.clone()).or_insert(next_id);
                if id == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen_in_doc.contains(&id) {
                    seen_in_doc.push(id);
                    doc_freq[id] += 1;
                }
            }
        }

        let n_docs = documents.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            vectors: Vec::new(),
        };

        index.vectors = tokenized
            .iter()
            .map(|tokens| index.weigh(tokens))
            .collect();

        index
    }

    /// Build a normalized query vector from normalized text.
    ///
    /// Terms outside the vocabulary are ignored.
    pub fn vectorize(&self, normalized: &str) -> SparseVector {
        self.weigh(&content_tokens(normalized))
    }

    /// Rank all documents against a normalized query.
    ///
    /// Results are sorted by score (highest first), ties by document index.
    /// Documents with zero similarity are omitted.
    pub fn rank(&self, normalized: &str) -> Vec<ScoredDocument> {
        let query = self.vectorize(normalized);
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<ScoredDocument> = self
            .vectors
            .iter()
            .enumerate()
            .filter_map(|(index, doc)| {
                let score = cosine_similarity(&query, doc);
                (score > 0.0).then_some(ScoredDocument { index, score })
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.index.cmp(&b.index))
        });

        results
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.vectors.len()
    }

    /// Number of distinct terms.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight for a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }

    /// Turn tokens into an L2-normalized TF-IDF vector.
    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&id) = self.vocabulary.get(token) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(id, tf)| (id, tf * self.idf[id]))
            .collect();
        vector.sort_by_key(|&(id, _)| id);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity between two sparse vectors.
///
/// Returns 0.0 if either vector is zero.
pub fn cosine_similarity(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let norm_a = a.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Merge-join on sorted term ids
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
