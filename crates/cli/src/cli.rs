//! Command-line arguments

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use tasktrack_core::config::DEFAULT_FILE_NAME;
use tasktrack_core::task::{parse_due_date, TaskStatus};
use tasktrack_core::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "tasktrack", version, about = "Track tasks in a local JSON file")]
pub struct Cli {
    /// Path to the JSON task file
    #[arg(long, global = true, env = "JSON_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.file)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all tasks
    ListAll,

    /// Find a task by its ID
    FindBy {
        /// The unique ID of the task
        id: u64,
    },

    /// Create a new task
    CreateTask {
        /// Title of the task
        #[arg(long)]
        title: String,

        /// Description of the task
        #[arg(long)]
        description: String,

        /// Due date of the task (YYYY-MM-DD)
        #[arg(long, value_parser = parse_due_date)]
        due_date: NaiveDate,
    },

    /// Update an existing task
    UpdateTask {
        /// The unique ID of the task
        id: u64,

        /// New title of the task
        #[arg(long)]
        title: Option<String>,

        /// New description of the task
        #[arg(long)]
        description: Option<String>,

        /// New due date of the task (YYYY-MM-DD)
        #[arg(long, value_parser = parse_due_date)]
        due_date: Option<NaiveDate>,

        /// New status of the task: Pending, Executing or Completed
        #[arg(long, value_parser = TaskStatus::from_str)]
        status: Option<TaskStatus>,
    },

    /// Delete a task by its ID
    DeleteTask {
        /// The unique ID of the task
        id: u64,
    },
}
