use async_trait::async_trait;
use campus_chatbot::error::{StoreError, StoreResult};
use campus_chatbot::models::QaPair;
use campus_chatbot::repositories::QaRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock Q&A repository for testing.
///
/// Provides an in-memory implementation of QaRepository that can be
/// seeded with test data, made to fail on writes, and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockQaRepository {
    pairs: Arc<Mutex<Vec<QaPair>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_appends: Arc<Mutex<bool>>,
    fail_lists: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockQaRepository {
    /// Create a new empty MockQaRepository.
    pub fn new() -> Self {
        Self {
            pairs: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_appends: Arc::new(Mutex::new(false)),
            fail_lists: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a repository holding the given pairs.
    pub fn with_pairs(pairs: Vec<QaPair>) -> Self {
        let repo = Self::new();
        *repo.pairs.lock().unwrap() = pairs;
        repo
    }

    /// Make every subsequent append fail with an I/O error.
    pub fn fail_appends(&self) {
        *self.fail_appends.lock().unwrap() = true;
    }

    /// Make every subsequent list fail with an I/O error.
    pub fn fail_lists(&self) {
        *self.fail_lists.lock().unwrap() = true;
    }

    /// Snapshot of the stored pairs.
    pub fn pairs(&self) -> Vec<QaPair> {
        self.pairs.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockQaRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QaRepository for MockQaRepository {
    async fn list(&self) -> StoreResult<Vec<QaPair>> {
        self.track_call("list");

        if *self.fail_lists.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store unavailable",
            )));
        }

        Ok(self.pairs.lock().unwrap().clone())
    }

    async fn append(&self, pair: QaPair) -> StoreResult<usize> {
        self.track_call("append");

        if *self.fail_appends.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }

        let mut pairs = self.pairs.lock().unwrap();
        pairs.push(pair);
        Ok(pairs.len())
    }

    async fn count(&self) -> StoreResult<usize> {
        self.track_call("count");
        Ok(self.pairs.lock().unwrap().len())
    }
}
