//! # Persistence Port
//!
//! The cart persists across restarts through a deliberately tiny
//! key-value surface: load a string payload by key, save one back.
//! Whatever embeddable storage the host offers (localStorage behind an
//! IPC bridge, a file next to the profile, a test HashMap) fits behind
//! [`SnapshotStore`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The fixed key under which the cart snapshot is stored.
pub const CART_SNAPSHOT_KEY: &str = "cart";

// =============================================================================
// Store Error
// =============================================================================

/// Failures from a snapshot store adapter.
///
/// Callers above the session layer rarely see these: the session logs
/// and swallows write failures, and treats read failures as an absent
/// snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage failed.
    #[error("storage error: {0}")]
    Io(#[from] io::Error),

    /// Payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Snapshot Store Port
// =============================================================================

/// Key-value snapshot storage.
///
/// Implementations must be durable across whatever "restart" means for
/// the host; nothing else is required. Payloads are opaque strings
/// (the session encodes JSON into them).
pub trait SnapshotStore {
    /// Loads the payload stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `payload` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory adapter: a HashMap. Used in tests and for hosts that
/// deliberately keep guest carts ephemeral.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed adapter: one `<key>.json` file per key under a
/// directory chosen by the host.
///
/// Writes go to a temporary file in the same directory followed by a
/// rename, so a crash mid-write leaves the previous snapshot intact
/// rather than a truncated one.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(JsonFileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}

/// Convenience: check whether a key's file exists without reading it.
pub fn snapshot_file_exists(dir: &Path, key: &str) -> bool {
    dir.join(format!("{key}.json")).exists()
}

// =============================================================================
// Unit Tests
// =============================================================================
