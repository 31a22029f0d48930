//! Key-value persistence for values that outlive a session
//!
//! The game only stores one integer (the high score), but it goes through a
//! small get/set port so the simulation never touches storage directly.
//! Backends:
//! - `MemoryStore`: process-local, for tests and throwaway sessions
//! - `JsonFileStore`: JSON map on disk (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

use std::collections::BTreeMap;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("value for {key:?} is not a non-negative integer: {raw:?}")]
    BadValue { key: String, raw: String },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Named non-negative integers that survive the process
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError>;
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value
    pub fn with_value(key: &str, value: u64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Parse a stored string value, the way browser storage hands it back
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn parse_stored(key: &str, raw: &str) -> Result<u64, StoreError> {
    raw.trim().parse::<u64>().map_err(|_| StoreError::BadValue {
        key: key.to_string(),
        raw: raw.to_string(),
    })
}
