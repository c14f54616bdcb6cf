//! Storage slot abstraction for the persisted record set.
//!
//! The ledger persists its whole record set as one serialized payload in a
//! single named slot, mirroring on-device key-value storage. The slot is
//! injected into the ledger at construction so tests (and embedders without a
//! filesystem) can substitute the in-memory implementation.

use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single named storage slot holding one serialized payload.
///
/// Absence of the slot (`load` returning `None`) is equivalent to an empty
/// record set. `save` must be atomic: if it fails, the previously stored
/// payload stays intact.
pub trait SlotStore: Send + Sync {
    /// Reads the current payload, or `None` if the slot has never been written.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the slot contents with `payload`.
    fn save(&self, payload: &str) -> Result<()>;
}

/// In-process storage slot. The standard store for tests; also useful for
/// embedders that keep the ledger purely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self
            .slot
            .lock()
            .map_err(|_| Error::storage("memory slot poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| Error::storage("memory slot poisoned"))?;
        *guard = Some(payload.to_string());
        Ok(())
    }
}

/// File-backed storage slot: one JSON document on disk.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a failed or interrupted write leaves the previous contents
/// intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the file at `path`. The file (and its parent
    /// directory) may not exist yet; it is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SlotStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
