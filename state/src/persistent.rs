//! Persistent settings store using sled database

use keepsake_core::{KeepsakeError, KeepsakeResult, SettingsStore, StoreConfig};
use sled::{Db, Tree};
use std::path::Path;
use tracing::debug;

/// Namespace used when none is given
pub const DEFAULT_NAMESPACE: &str = "settings";

fn storage_err(e: sled::Error) -> KeepsakeError {
    KeepsakeError::StorageError(e.to_string())
}

/// Persistent settings namespace backed by a sled tree.
///
/// One database can hold many namespaces; each maps to its own tree.
pub struct SledSettingsStore {
    db: Db,
    tree: Tree,
    namespace: String,
    flush_on_write: bool,
}

impl SledSettingsStore {
    /// Open the default namespace
    pub fn open<P: AsRef<Path>>(path: P) -> KeepsakeResult<Self> {
        Self::open_namespace(path, DEFAULT_NAMESPACE)
    }

    /// Open (or create) a named namespace
    pub fn open_namespace<P: AsRef<Path>>(path: P, namespace: &str) -> KeepsakeResult<Self> {
        let db = sled::open(path.as_ref()).map_err(storage_err)?;
        let store = Self::from_db(db, namespace)?;
        debug!(path = %path.as_ref().display(), namespace, "settings store opened");
        Ok(store)
    }

    /// Open the store described by a configuration
    pub fn from_config(config: &StoreConfig) -> KeepsakeResult<Self> {
        config.validate()?;
        let mut store = Self::open_namespace(&config.data_dir, &config.namespace)?;
        store.flush_on_write = config.flush_on_write;
        Ok(store)
    }

    fn from_db(db: Db, namespace: &str) -> KeepsakeResult<Self> {
        if namespace.trim().is_empty() {
            return Err(KeepsakeError::ConfigError("namespace must not be empty".into()));
        }
        let tree = db.open_tree(namespace).map_err(storage_err)?;
        Ok(Self {
            db,
            tree,
            namespace: namespace.to_string(),
            flush_on_write: true,
        })
    }

    /// Open another namespace in the same database
    pub fn namespace(&self, namespace: &str) -> KeepsakeResult<Self> {
        let mut store = Self::from_db(self.db.clone(), namespace)?;
        store.flush_on_write = self.flush_on_write;
        Ok(store)
    }

    pub fn namespace_name(&self) -> &str {
        &self.namespace
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> KeepsakeResult<()> {
        self.tree.flush().map(|_| ()).map_err(storage_err)
    }

    /// Number of entries in this namespace
    pub fn size_estimate(&self) -> u64 {
        self.tree.len() as u64
    }
}

impl SettingsStore for SledSettingsStore {
    fn get(&self, key: &str) -> KeepsakeResult<Option<Vec<u8>>> {
        self.tree
            .get(key.as_bytes())
            .map(|opt| opt.map(|v| v.to_vec()))
            .map_err(storage_err)
    }

    fn set(&self, key: &str, value: &[u8]) -> KeepsakeResult<()> {
        self.tree.insert(key.as_bytes(), value).map_err(storage_err)?;
        if self.flush_on_write {
            self.flush()?;
        }
        Ok(())
    }

    fn delete(&self, key: &str) -> KeepsakeResult<()> {
        self.tree.remove(key.as_bytes()).map_err(storage_err)?;
        if self.flush_on_write {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> KeepsakeResult<Vec<String>> {
        self.tree
            .iter()
            .keys()
            .map(|result| {
                let key = result.map_err(storage_err)?;
                String::from_utf8(key.to_vec())
                    .map_err(|e| KeepsakeError::StorageError(format!("non-UTF-8 key: {}", e)))
            })
            .collect()
    }

    fn exists(&self, key: &str) -> KeepsakeResult<bool> {
        self.tree.contains_key(key.as_bytes()).map_err(storage_err)
    }
}
