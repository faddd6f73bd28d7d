//! In-memory blob store for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{BlobStore, DatasetKey, Result, StoreError};

/// Blob store holding datasets in a sorted map keyed by dataset path.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored dataset.
    pub fn snapshot(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        let blobs = self.blobs.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(blobs.clone())
    }

    pub fn len(&self) -> usize {
        self.blobs.read().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for InMemoryBlobStore {
    fn put(&self, key: &DatasetKey, bytes: &[u8]) -> Result<()> {
        let mut blobs = self.blobs.write().map_err(|_| StoreError::LockPoisoned)?;
        blobs.insert(key.path(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &DatasetKey) -> Result<Option<Vec<u8>>> {
        let blobs = self.blobs.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(blobs.get(&key.path()).cloned())
    }

    fn list(&self) -> Result<Vec<String>> {
        let blobs = self.blobs.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(blobs.keys().cloned().collect())
    }
}
