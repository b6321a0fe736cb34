//! File-based task storage implementation
//!
//! Stores tasks as a JSON array in a single file on disk. Every save rewrites
//! the whole file. There is no locking: when two processes write the same
//! file, the last writer wins.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::Task;
use super::repository::TaskRepository;
use crate::config::StoreConfig;
use crate::{Error, Result};

/// File-based task store using JSON
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// Nothing is read until [`TaskRepository::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Error::storage(parent, "Failed to create data directory", e)
            })?;
        }
        Ok(())
    }

    fn encode(&self, tasks: &[Task]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        tasks
            .serialize(&mut ser)
            .map_err(|e| Error::storage(&self.path, "Failed to serialize tasks", e))?;
        Ok(buf)
    }
}

impl TaskRepository for FileTaskStore {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Task file missing, creating empty list");
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(&self.path, "Failed to read tasks file", e))?;
        let tasks: Vec<Task> = serde_json::from_str(&content)
            .map_err(|e| Error::storage(&self.path, "Failed to parse tasks file", e))?;
        check_tasks(&tasks)
            .map_err(|reason| Error::storage(&self.path, "Invalid tasks file", reason))?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = self.encode(tasks)?;
        self.ensure_parent_dir()?;
        fs::write(&self.path, content)
            .map_err(|e| Error::storage(&self.path, "Failed to write tasks file", e))?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

/// Ids must be positive, distinct and leave room for a successor; text
/// fields must not be blank.
fn check_tasks(tasks: &[Task]) -> std::result::Result<(), String> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.id == 0 || task.id == u64::MAX {
            return Err(format!("task id {} is out of range", task.id));
        }
        if !seen.insert(task.id) {
            return Err(format!("task id {} appears more than once", task.id));
        }
        if task.title.trim().is_empty() {
            return Err(format!("task {} has an empty title", task.id));
        }
        if task.description.trim().is_empty() {
            return Err(format!("task {} has an empty description", task.id));
        }
    }
    Ok(())
}
