use crate::error::StoreResult;
use crate::models::{default_corpus, QaPair};
use crate::repositories::traits::QaRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Q&A repository backed by a JSON array file.
///
/// A missing file is created from the bundled corpus on first access.
/// Writes go through a temporary sibling file and a rename, and are
/// serialized by an async mutex.
pub struct JsonQaRepository {
    path: PathBuf,
    seed: Vec<QaPair>,
    write_lock: Mutex<()>,
}

impl JsonQaRepository {
    /// Create a repository seeded with the bundled corpus.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_seed(path, default_corpus())
    }

    /// Create a repository with a custom seed corpus.
    pub fn with_seed(path: impl Into<PathBuf>, seed: Vec<QaPair>) -> Self {
        Self {
            path: path.into(),
            seed,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, seeding it if it does not exist.
    async fn load(&self) -> StoreResult<Vec<QaPair>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Q&A store {} not found, seeding with {} pairs",
                    self.path.display(),
                    self.seed.len()
                );
                self.save(&self.seed).await?;
                Ok(self.seed.clone())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write all pairs through a temporary file.
    async fn save(&self, pairs: &[QaPair]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(pairs)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl QaRepository for JsonQaRepository {
    async fn list(&self) -> StoreResult<Vec<QaPair>> {
        let _guard = self.write_lock.lock().await;
        self.load().await
    }

    async fn append(&self, pair: QaPair) -> StoreResult<usize> {
        let _guard = self.write_lock.lock().await;
        let mut pairs = self.load().await?;
        pairs.push(pair);
        self.save(&pairs).await?;
        tracing::debug!("Q&A store now holds {} pairs", pairs.len());
        Ok(pairs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("qa.json");
        let repo = JsonQaRepository::with_seed(&path, vec![QaPair::new("q1", "a1")]);

        let pairs = repo.list().await.unwrap();
        assert_eq!(pairs, vec![QaPair::new("q1", "a1")]);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_append_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        let repo = JsonQaRepository::with_seed(&path, vec![QaPair::new("q1", "a1")]);

        assert_eq!(repo.append(QaPair::new("q2", "a2")).await.unwrap(), 2);

        let reopened = JsonQaRepository::with_seed(&path, Vec::new());
        let pairs = reopened.list().await.unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].question, "q2");
        assert_eq!(reopened.count().await.unwrap(), 2);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonQaRepository::new(&path);
        assert!(matches!(repo.list().await, Err(StoreError::Json(_))));
    }
}
