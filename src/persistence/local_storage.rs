//! Browser LocalStorage backend (wasm32)
//!
//! Values are stored as decimal strings, one LocalStorage item per key.

use web_sys::Storage;

use super::{KeyValueStore, StoreError, parse_stored};

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Open the window's LocalStorage
    pub fn open() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("LocalStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        let raw = self
            .storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        raw.map(|raw| parse_stored(key, &raw)).transpose()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.storage
            .set_item(key, &value.to_string())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        log::info!("{} saved ({})", key, value);
        Ok(())
    }
}
