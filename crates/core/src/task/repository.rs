//! Task repository trait
//!
//! Defines the interface for task list persistence.

use super::model::Task;
use crate::Result;

/// Whole-list persistence for tasks
pub trait TaskRepository {
    /// Load every stored task, in stored order
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored list with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Next identifier for a list: one past the highest id, or 1 when empty.
///
/// `None` when the highest id is `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Option<u64> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
