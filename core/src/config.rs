//! Configuration types for Keepsake

use crate::error::{KeepsakeError, KeepsakeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings store backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-local map, lost on exit
    Memory,
    /// On-disk sled database
    #[default]
    Sled,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Sled => "sled",
        }
    }
}

/// Settings store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Which backend holds the namespace
    pub backend: Backend,

    /// Data directory (sled only)
    pub data_dir: PathBuf,

    /// Namespace name; isolates keys from other namespaces in the same store
    pub namespace: String,

    /// Flush to disk after every write (sled only)
    pub flush_on_write: bool,

    /// Logging level
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sled,
            data_dir: PathBuf::from("./data"),
            namespace: "settings".to_string(),
            flush_on_write: true,
            log_level: "info".to_string(),
        }
    }
}

impl StoreConfig {
    /// In-memory configuration, mostly for tests
    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory,
            ..Self::default()
        }
    }

    /// Parse configuration from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> KeepsakeResult<Self> {
        let config: StoreConfig = serde_json::from_str(json)
            .map_err(|e| KeepsakeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> KeepsakeResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            KeepsakeError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(KeepsakeError::ConfigError("namespace must not be empty".into()));
        }
        if self.backend == Backend::Sled && self.data_dir.as_os_str().is_empty() {
            return Err(KeepsakeError::ConfigError("data_dir must not be empty".into()));
        }
        Ok(())
    }
}
