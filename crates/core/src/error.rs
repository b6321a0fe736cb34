//! Error types for the core library

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("No task ids left after {0}")]
    IdsExhausted(u64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error at {path}: {message}")]
    Storage {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a Storage error wrapping an underlying cause
    pub fn storage(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Whether this is the expected "no such task" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TaskNotFound(_))
    }
}

/// Caller-correctable input errors. Never cause a write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Due date must be today or later (got {due_date}, today is {today})")]
    DueDateInPast { due_date: NaiveDate, today: NaiveDate },

    #[error("Invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    #[error("Invalid status '{0}', expected one of Pending, Executing, Completed")]
    InvalidStatus(String),
}
