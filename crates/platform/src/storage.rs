//! Slot-based persistence.
//!
//! Every durable record lives in a flat map of string slots to JSON
//! strings. [`StorageBackend`] is that contract, with a file-backed
//! implementation for real use and an in-memory one for tests. [`Storage`]
//! layers typed (de)serialization on top and owns the corruption policy: an
//! unparseable slot is cleared, logged, and treated as absent - never
//! fatal.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while reading or writing a slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O failed for slot {slot}: {source}")]
    Io {
        /// Slot being accessed.
        slot: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized for writing.
    #[error("could not serialize slot {slot}: {source}")]
    Serialize {
        /// Slot being written.
        slot: String,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

/// A flat map of named slots to JSON strings.
///
/// Writes are last-writer-wins with no locking or versioning: two processes
/// sharing a data directory can clobber each other's slots. That is an
/// accepted limitation, not an invariant to build on.
pub trait StorageBackend: Send + Sync {
    /// Read the raw contents of a slot, `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the underlying read fails.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw contents of a slot, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the underlying write fails.
    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the underlying removal fails.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON document per slot under a data directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            slot: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(slot), value).map_err(|source| StorageError::Io {
            slot: slot.to_string(),
            source,
        })
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                slot: slot.to_string(),
                source,
            }),
        }
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().expect("storage lock poisoned");
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().expect("storage lock poisoned");
        slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().expect("storage lock poisoned");
        slots.remove(slot);
        Ok(())
    }
}

/// Typed access over a [`StorageBackend`].
///
/// Cheaply cloneable; every store in the platform holds one.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Load and deserialize a slot.
    ///
    /// A slot that exists but does not parse is treated as corrupted: it is
    /// removed, a warning is logged, and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for I/O failures, never for bad content.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.read(slot)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(slot, error = %e, "clearing corrupted storage slot");
                self.backend.remove(slot)?;
                Ok(None)
            }
        }
    }

    /// Serialize and persist a value into a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the write fails.
    pub fn save<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            slot: slot.to_string(),
            source,
        })?;
        self.backend.write(slot, &raw)
    }

    /// Remove a slot. Removing an absent slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the removal fails.
    pub fn remove(&self, slot: &str) -> Result<(), StorageError> {
        self.backend.remove(slot)
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn memory_storage() -> Storage {
        Storage::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_load_absent_slot() {
        let storage = memory_storage();
        let loaded: Option<Vec<String>> = storage.load("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let storage = memory_storage();
        storage.save("slot", &vec!["a".to_string()]).unwrap();

        let loaded: Option<Vec<String>> = storage.load("slot").unwrap();
        assert_eq!(loaded, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_corrupted_slot_cleared_and_absent() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write("slot", "{not json").unwrap();

        let storage = Storage::new(Arc::clone(&backend) as Arc<dyn StorageBackend>);
        let loaded: Option<Vec<String>> = storage.load("slot").unwrap();
        assert!(loaded.is_none());

        // The corrupted contents are gone, not just skipped.
        assert!(backend.read("slot").unwrap().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = memory_storage();
        storage.save("slot", &1u8).unwrap();
        storage.remove("slot").unwrap();
        storage.remove("slot").unwrap();
        let loaded: Option<u8> = storage.load("slot").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = std::env::temp_dir().join(format!("learnhub-storage-{}", uuid::Uuid::new_v4()));
        let backend = FileBackend::create(&dir).unwrap();

        assert!(backend.read("slot").unwrap().is_none());
        backend.write("slot", "[1,2]").unwrap();
        assert_eq!(backend.read("slot").unwrap().as_deref(), Some("[1,2]"));
        backend.remove("slot").unwrap();
        backend.remove("slot").unwrap();
        assert!(backend.read("slot").unwrap().is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
