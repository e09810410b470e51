//! # Cart Storage Backends
//!
//! The synchronous text key-value slot the cart snapshot persists to.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Storage                                      │
//! │                                                                         │
//! │  read()  ──► Some(payload) | None (nothing persisted yet)               │
//! │  write() ──► replaces the whole payload                                 │
//! │                                                                         │
//! │  One slot, one JSON payload - the browser-localStorage model.           │
//! │  Parsing (and malformed-payload recovery) happens in CartStore,         │
//! │  not here.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Cart Storage Trait
// =============================================================================

/// Synchronous text storage for the persisted cart snapshot.
pub trait CartStorage: Send + Sync {
    /// Reads the persisted payload. `None` when nothing was stored yet.
    fn read(&self) -> StoreResult<Option<String>>;

    /// Replaces the persisted payload.
    fn write(&self, payload: &str) -> StoreResult<()>;
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage slot for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Creates an empty storage slot.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a storage slot pre-loaded with a payload (e.g. a malformed
    /// one, for degradation tests).
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemoryStorage {
            payload: Mutex::new(Some(payload.into())),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self) -> StoreResult<Option<String>> {
        let slot = self.payload.lock().expect("storage mutex poisoned");
        Ok(slot.clone())
    }

    fn write(&self, payload: &str) -> StoreResult<()> {
        let mut slot = self.payload.lock().expect("storage mutex poisoned");
        *slot = Some(payload.to_string());
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage slot: one JSON payload per file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a storage slot at a file path. The parent directory is
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }
}

impl CartStorage for FileStorage {
    fn read(&self) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::StorageRead(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&self, payload: &str) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::StorageWrite(format!("{}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&self.path, payload)
            .map_err(|e| StoreError::StorageWrite(format!("{}: {}", self.path.display(), e)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);

        storage.write("{\"entries\":[]}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"entries\":[]}"));
    }

    #[test]
    fn test_file_storage_absent_file_reads_none() {
        let storage = FileStorage::new("/nonexistent/dir/cart.json");
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let path = std::env::temp_dir().join("glow-store-test-cart.json");
        std::fs::remove_file(&path).ok();

        let storage = FileStorage::new(&path);
        storage.write("{\"entries\":[]}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{\"entries\":[]}"));

        std::fs::remove_file(&path).ok();
    }
}
