use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root directory used when none is configured.
pub const DEFAULT_ROOT: &str = "burrow";

/// Environment variable read by [`StoreConfig::from_env`].
pub const ROOT_ENV_VAR: &str = "BURROW_DB_DIR";

/// Store configuration. The storage root is the only option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Reads the root from `BURROW_DB_DIR`, falling back to the default when unset or empty.
    pub fn from_env() -> Self {
        match env::var_os(ROOT_ENV_VAR) {
            Some(root) if !root.is_empty() => Self::default().with_root(root),
            _ => Self::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
