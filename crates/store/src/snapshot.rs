//! Snapshot persistence seam for the partitioned store.
//!
//! The durable side-store is a whole-store document: mutations write
//! everything, startup reads everything. Partition-level writes are a
//! possible optimization, not a contract.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::partition::PartitionedStore;

/// Snapshot operation error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot codec: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Durable store for the full partitioned structure.
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot, if any exists yet.
    fn load(&self) -> Result<Option<PartitionedStore>, SnapshotError>;

    /// Replace the stored snapshot with the given store.
    fn save(&self, store: &PartitionedStore) -> Result<(), SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> Result<Option<PartitionedStore>, SnapshotError> {
        (**self).load()
    }

    fn save(&self, store: &PartitionedStore) -> Result<(), SnapshotError> {
        (**self).save(store)
    }
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<PartitionedStore>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<PartitionedStore>, SnapshotError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, store: &PartitionedStore) -> Result<(), SnapshotError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| SnapshotError::Unavailable("lock poisoned".to_string()))?;
        *guard = Some(store.clone());
        Ok(())
    }
}

/// JSON-file snapshot store (the production side-store).
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Result<Option<PartitionedStore>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let store = serde_json::from_str(&raw)?;
        Ok(Some(store))
    }

    fn save(&self, store: &PartitionedStore) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string_pretty(store)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
