//! Core traits defining Keepsake interfaces
//!
//! A settings store is the key-value namespace mementos are written into.
//! Backends live in `keepsake-state`; the caretaker only sees this trait.

use crate::error::KeepsakeResult;
use std::sync::Arc;

/// Key-value settings namespace
pub trait SettingsStore: Send + Sync {
    /// Get the bytes stored under a key
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>>;

    /// Store bytes under a key, replacing any previous value
    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()>;

    /// Remove a key
    fn delete(&self, key: &str) -> KeepsakeResult<()>;

    /// All keys in the namespace, sorted
    fn keys(&self) -> KeepsakeResult<Vec<String>>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> KeepsakeResult<()> {
        (**self).delete(key)
    }

    fn keys(&self) -> KeepsakeResult<Vec<String>> {
        (**self).keys()
    }

    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        (**self).exists(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> KeepsakeResult<()> {
        (**self).delete(key)
    }

    fn keys(&self) -> KeepsakeResult<Vec<String>> {
        (**self).keys()
    }

    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        (**self).exists(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> KeepsakeResult<()> {
        (**self).delete(key)
    }

    fn keys(&self) -> KeepsakeResult<Vec<String>> {
        (**self).keys()
    }

    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        (**self).exists(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<BTreeMap<String, Vec<u8>>>);

    impl SettingsStore for MapStore {
        fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_vec());
            Ok(())
        }

        fn delete(&self, key: &str) -> KeepsakeResult<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }

        fn keys(&self) -> KeepsakeResult<Vec<String>> {
            Ok(self.0.lock().unwrap().keys().cloned().collect())
        }
    }

    #[test]
    fn test_default_exists_uses_get() {
        let store = MapStore::default();
        assert!(!store.exists("a").unwrap());
        store.set("a", b"1").unwrap();
        assert!(store.exists("a").unwrap());
    }

    #[test]
    fn test_shared_handles_see_same_namespace() {
        let store = Arc::new(MapStore::default());
        let other = Arc::clone(&store);

        store.set("a", b"1").unwrap();
        assert_eq!(other.get("a").unwrap(), Some(b"1".to_vec()));

        let boxed: Box<dyn SettingsStore> = Box::new(other);
        boxed.delete("a").unwrap();
        assert_eq!((&*store).get("a").unwrap(), None);
    }
}
