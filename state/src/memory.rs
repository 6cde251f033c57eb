//! In-memory settings store for testing and ephemeral sessions

use dashmap::DashMap;
use keepsake_core::{KeepsakeResult, SettingsStore};
use std::sync::Arc;

/// In-memory settings namespace.
///
/// Each instance is its own namespace; clones copy the data.
pub struct MemorySettingsStore {
    data: DashMap<String, Vec<u8>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    pub fn with_data(data: Vec<(String, Vec<u8>)>) -> Self {
        let store = Self::new();
        for (key, value) in data {
            store.data.insert(key, value);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemorySettingsStore {
    fn clone(&self) -> Self {
        let new_store = Self::new();
        for entry in self.data.iter() {
            new_store.data.insert(entry.key().clone(), entry.value().clone());
        }
        new_store
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
        Ok(self.data.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> KeepsakeResult<()> {
        self.data.remove(key);
        Ok(())
    }

    fn keys(&self) -> KeepsakeResult<Vec<String>> {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        Ok(self.data.contains_key(key))
    }
}

/// Thread-safe memory store wrapper
pub type SharedMemoryStore = Arc<MemorySettingsStore>;

/// Create a shared memory settings store
pub fn create_memory_store() -> SharedMemoryStore {
    Arc::new(MemorySettingsStore::new())
}
