use std::collections::HashMap;
use log::warn;
use crate::StoreError;

/// Synchronous string key/value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Where the best score survives between runs.
pub trait HighScoreStore {
    /// Never fails: an unreadable or corrupt value counts as no high score yet.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Keeps the high score as decimal text under a single key.
#[derive(Debug, Clone)]
pub struct KeyValueHighScore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueHighScore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> HighScoreStore for KeyValueHighScore<S> {
    fn load(&self) -> u32 {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("ignoring unparsable high score {:?} under {}", raw, self.key);
                0
            }),
            Ok(None) => 0,
            Err(e) => {
                warn!("high score unavailable, starting from 0: {}", e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.store.set(&self.key, &score.to_string())
    }
}

/// Process-local store. Backs tests and hosts without persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// When set, every access fails as if storage were disabled.
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn unavailable() -> Self {
        MemoryStore { values: HashMap::new(), unavailable: true }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory store disabled".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "memory store disabled".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
