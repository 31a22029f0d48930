//! Persisted best score
//!
//! Read once from the store at startup, written back every time it is beaten.
//! Storage failures are logged and never interrupt play: a failed read starts
//! from zero, a failed write keeps the in-memory value.

use crate::persistence::KeyValueStore;

/// Store key for the best score
pub const HIGH_SCORE_KEY: &str = "highScore";

#[derive(Debug)]
pub struct HighScore<S> {
    store: S,
    best: u64,
}

impl<S: KeyValueStore> HighScore<S> {
    /// Load the best score from `store`
    pub fn load(store: S) -> Self {
        let best = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(best)) => {
                log::info!("Loaded high score {}", best);
                best
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read high score, starting from 0: {}", e);
                0
            }
        };
        Self { store, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a score. Returns true if it beat the previous best (and was
    /// persisted, or at least attempted).
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.set(HIGH_SCORE_KEY, score) {
            log::warn!("Could not save high score {}: {}", score, e);
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StoreError};

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<u64>, StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }

        fn set(&mut self, _key: &str, _value: u64) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("broken".to_string()))
        }
    }

    #[test]
    fn test_loads_existing_value() {
        let high = HighScore::load(MemoryStore::with_value(HIGH_SCORE_KEY, 250));
        assert_eq!(high.best(), 250);
    }

    #[test]
    fn test_record_only_increases() {
        let mut high = HighScore::load(MemoryStore::new());
        assert_eq!(high.best(), 0);

        assert!(high.record(50));
        assert!(!high.record(40));
        assert!(!high.record(50));
        assert_eq!(high.best(), 50);
        assert_eq!(high.store().get(HIGH_SCORE_KEY).ok(), Some(Some(50)));
    }

    #[test]
    fn test_broken_store_does_not_stop_play() {
        let mut high = HighScore::load(BrokenStore);
        assert_eq!(high.best(), 0);
        assert!(high.record(10));
        assert_eq!(high.best(), 10);
    }
}
