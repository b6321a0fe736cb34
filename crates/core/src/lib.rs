//! Core library for tasktrack
//!
//! This crate contains the core business logic, including:
//! - The task model and its text forms
//! - JSON file persistence of the task list
//! - The task service enforcing due-date and partial-update rules

pub mod config;
pub mod error;
pub mod task;

pub use config::StoreConfig;
pub use error::{Error, ValidationError};
pub type Result<T> = std::result::Result<T, Error>;
