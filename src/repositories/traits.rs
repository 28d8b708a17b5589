use crate::error::StoreResult;
use crate::models::QaPair;
use async_trait::async_trait;

/// Repository for the Q&A corpus.
///
/// Provides abstraction over corpus storage, enabling different
/// implementations (JSON file, in-memory mock).
#[async_trait]
pub trait QaRepository: Send + Sync {
    /// Retrieve all pairs in insertion order.
    async fn list(&self) -> StoreResult<Vec<QaPair>>;

    /// Append a pair and return the new total.
    async fn append(&self, pair: QaPair) -> StoreResult<usize>;

    /// Number of stored pairs.
    async fn count(&self) -> StoreResult<usize> {
        Ok(self.list().await?.len())
    }
}
