//! JSON file backend (native)
//!
//! The whole store is one JSON object of `name -> integer`. Writes go to a
//! sibling temp file first and are renamed over the real file, so a crash
//! mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

const APP_DIR: &str = "catch-fall";
const FILE_NAME: &str = "store.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/catch-fall/store.json`, or the working directory when the
    /// platform has no data directory
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, u64>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, values: &BTreeMap<String, u64>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<u64>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        // Keep other keys; a corrupt file is replaced rather than blocking saves
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StoreError::Corrupt(e)) => {
                log::warn!("Replacing corrupt store {:?}: {}", self.path, e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value);
        self.write_all(&values)?;
        log::debug!("Stored {} = {} in {:?}", key, value, self.path);
        Ok(())
    }
}
