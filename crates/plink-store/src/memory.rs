//! # In-Memory Backend
//!
//! A `Mutex<HashMap>` backend for tests and ephemeral sessions. Each
//! trait method takes the lock once, so single-operation atomicity holds
//! trivially.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::backend::KeyValueBackend;
use crate::error::StoreError;

/// Volatile key-value backend over a locked hash map.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.map
            .lock()
            .map_err(|_| StoreError::Backend("memory backend lock poisoned".to_string()))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.locked()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.locked()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.locked()?.remove(key);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        Ok(self
            .locked()?
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
