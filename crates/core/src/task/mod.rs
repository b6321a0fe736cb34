//! Task module
//!
//! This module contains the task model, its file store and the service
//! enforcing task rules.

mod file_store;
mod model;
mod repository;
mod service;

pub use file_store::FileTaskStore;
pub use model::*;
pub use repository::{next_id, TaskRepository};
pub use service::TaskService;
