//! Storage configuration

use std::path::{Path, PathBuf};

/// File name used when no path is configured
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Location of the JSON task file.
///
/// Resolved once at startup and handed to the store; nothing reads the
/// environment after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}
