//! Owned index lifecycle: explicit build and atomic swap.

use std::sync::{Arc, RwLock};
use textsim_embed::EmbeddingProvider;

use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::{CorpusIndex, Document, build_index};

/// Holds the single active corpus index and swaps it atomically on rebuild.
///
/// Readers take [`Arc`] snapshots and keep using a complete index even while
/// a rebuild is in flight; they observe either the old index in full or the
/// new one in full, never a partially built one. Construction happens
/// outside the lock; the write lock is held only for the pointer swap.
#[derive(Debug, Default)]
pub struct IndexHandle {
    current: RwLock<Option<Arc<CorpusIndex>>>,
}

impl IndexHandle {
    /// Create a handle with no index installed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current index snapshot, if one has been built.
    pub fn snapshot(&self) -> Option<Arc<CorpusIndex>> {
        self.current.read().unwrap().clone()
    }

    /// Build a fresh index over `docs` and swap it in.
    ///
    /// All-or-nothing: on failure the previously installed index (if any)
    /// remains active and untouched.
    pub async fn rebuild(
        &self,
        config: &IndexConfig,
        provider: &dyn EmbeddingProvider,
        docs: Vec<Document>,
    ) -> Result<Arc<CorpusIndex>> {
        let index = Arc::new(build_index(config, provider, docs).await?);
        *self.current.write().unwrap() = Some(Arc::clone(&index));
        tracing::info!(documents = index.len(), "Swapped in new corpus index");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingProvider, StubProvider, toy_docs};

    #[tokio::test]
    async fn snapshot_is_none_before_first_build() {
        let handle = IndexHandle::new();
        assert!(handle.snapshot().is_none());
    }

    #[tokio::test]
    async fn rebuild_installs_and_replaces() {
        let handle = IndexHandle::new();
        let config = IndexConfig::default();

        let first = handle
            .rebuild(&config, &StubProvider, toy_docs())
            .await
            .unwrap();
        let snap = handle.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &snap));

        // Held snapshots stay valid across a swap
        let second = handle
            .rebuild(&config, &StubProvider, toy_docs()[..2].to_vec())
            .await
            .unwrap();
        assert_eq!(snap.len(), 3);
        assert_eq!(second.len(), 2);
        assert!(Arc::ptr_eq(&second, &handle.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn failed_rebuild_keeps_previous_index() {
        let handle = IndexHandle::new();
        let config = IndexConfig::default();
        let first = handle
            .rebuild(&config, &StubProvider, toy_docs())
            .await
            .unwrap();

        let failed = handle.rebuild(&config, &FailingProvider, toy_docs()).await;
        assert!(failed.is_err());
        assert!(Arc::ptr_eq(&first, &handle.snapshot().unwrap()));

        let empty = handle.rebuild(&config, &StubProvider, Vec::new()).await;
        assert!(empty.is_err());
        assert!(Arc::ptr_eq(&first, &handle.snapshot().unwrap()));
    }
}
