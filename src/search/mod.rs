//! Vector-space retrieval over the Q&A corpus.
//!
//! This module provides the TF-IDF index and the boosted similarity
//! fallback used when exact lookup and intent rules find nothing.

pub mod retriever;
pub mod tfidf_index;

pub use retriever::{RetrievalMatch, SimilarityRetriever, OVERLAP_BOOST, PHRASE_BOOST};
pub use tfidf_index::{cosine_similarity, ScoredDocument, SparseVector, TfIdfIndex};
