//! Subcommand execution
//!
//! Runs one [`Command`] against a [`TaskService`] and writes the user-facing
//! result. Validation failures and missing tasks are reported here; only
//! storage failures escape as errors.

use std::io::Write;

use tasktrack_core::task::{CreateTask, TaskRepository, TaskService, UpdateTask};
use tasktrack_core::Error;

use crate::cli::Command;
use crate::render::task_table;

/// How a command ended, for the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Rejected,
}

/// Process exit status: 0 on success or a missing task, 1 otherwise
pub fn exit_status(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::Success | Outcome::NotFound) => 0,
        Ok(Outcome::Rejected) | Err(_) => 1,
    }
}

pub fn execute<R: TaskRepository>(
    command: Command,
    service: &mut TaskService<R>,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let result = match command {
        Command::ListAll => {
            write!(out, "{}", task_table(service.list_all()))?;
            return Ok(Outcome::Success);
        }
        Command::FindBy { id } => {
            return match service.find_by_id(id) {
                Some(task) => {
                    write!(out, "{}", task_table([task]))?;
                    Ok(Outcome::Success)
                }
                None => {
                    writeln!(out, "Task {id} not found")?;
                    Ok(Outcome::NotFound)
                }
            };
        }
        Command::CreateTask {
            title,
            description,
            due_date,
        } => service
            .create_task(CreateTask {
                title,
                description,
                due_date: Some(due_date),
            })
            .map(|task| format!("Task {} created successfully", task.id)),
        Command::UpdateTask {
            id,
            title,
            description,
            due_date,
            status,
        } => service
            .update_task(
                id,
                UpdateTask {
                    title,
                    description,
                    due_date,
                    status,
                },
            )
            .map(|task| format!("Task {} updated successfully", task.id)),
        Command::DeleteTask { id } => service
            .delete_task(id)
            .map(|()| format!("Task {id} deleted successfully")),
    };

    match result {
        Ok(message) => {
            writeln!(out, "{message}")?;
            Ok(Outcome::Success)
        }
        Err(Error::TaskNotFound(id)) => {
            writeln!(out, "Task {id} not found")?;
            Ok(Outcome::NotFound)
        }
        Err(Error::Validation(e)) => {
            writeln!(out, "{e}")?;
            Ok(Outcome::Rejected)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use tasktrack_core::task::{FileTaskStore, TaskStatus};
    use tasktrack_core::StoreConfig;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    fn open(temp: &TempDir) -> TaskService<FileTaskStore> {
        let config = StoreConfig::new(temp.path().join("tasks.json"));
        TaskService::open(&config).unwrap().with_clock(today)
    }

    fn run(service: &mut TaskService<FileTaskStore>, command: Command) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = execute(command, service, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn create(title: &str, due_date: NaiveDate) -> Command {
        Command::CreateTask {
            title: title.to_string(),
            description: "Description".to_string(),
            due_date,
        }
    }

    #[test]
    fn test_create_then_list() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);

        let (outcome, output) = run(&mut service, create("Task 1", today() + Days::new(1)));
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(output, "Task 1 created successfully\n");

        let (outcome, output) = run(&mut service, Command::ListAll);
        assert_eq!(outcome, Outcome::Success);
        assert!(output.contains("| Task 1 "));
        assert!(output.contains("2030-06-16"));
        assert!(output.contains("Pending"));
    }

    #[test]
    fn test_create_with_past_due_date() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);

        let (outcome, output) = run(&mut service, create("Task 3", today() - Days::new(1)));
        assert_eq!(outcome, Outcome::Rejected);
        assert!(output.contains("Due date must be today or later"));
        assert!(service.list_all().is_empty());
    }

    #[test]
    fn test_create_with_blank_title() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);

        let (outcome, output) = run(&mut service, create("", today()));
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(output, "Missing required field: title\n");
    }

    #[test]
    fn test_find_by() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);
        run(&mut service, create("Task 1", today()));

        let (outcome, output) = run(&mut service, Command::FindBy { id: 1 });
        assert_eq!(outcome, Outcome::Success);
        assert!(output.contains("Task 1"));

        let (outcome, output) = run(&mut service, Command::FindBy { id: 3 });
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(output, "Task 3 not found\n");
    }

    #[test]
    fn test_update_task() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);
        run(&mut service, create("Task 1", today()));

        let (outcome, output) = run(
            &mut service,
            Command::UpdateTask {
                id: 1,
                title: Some("Task 1 Updated".to_string()),
                description: None,
                due_date: None,
                status: Some(TaskStatus::Executing),
            },
        );
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(output, "Task 1 updated successfully\n");

        let task = service.find_by_id(1).unwrap();
        assert_eq!(task.title, "Task 1 Updated");
        assert_eq!(task.description, "Description");
        assert_eq!(task.status, TaskStatus::Executing);
    }

    #[test]
    fn test_update_task_not_found() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);

        let (outcome, output) = run(
            &mut service,
            Command::UpdateTask {
                id: 3,
                title: Some("Task 3 Updated".to_string()),
                description: None,
                due_date: None,
                status: None,
            },
        );
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(output, "Task 3 not found\n");
    }

    #[test]
    fn test_delete_task() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);
        run(&mut service, create("Task 1", today()));

        let (outcome, output) = run(&mut service, Command::DeleteTask { id: 1 });
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(output, "Task 1 deleted successfully\n");

        let (outcome, output) = run(&mut service, Command::DeleteTask { id: 1 });
        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(output, "Task 1 not found\n");
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(Outcome::Success)), 0);
        assert_eq!(exit_status(&Ok(Outcome::NotFound)), 0);
        assert_eq!(exit_status(&Ok(Outcome::Rejected)), 1);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("boom"))), 1);
    }

    #[test]
    fn test_failed_save_is_error_without_success_message() {
        let temp = TempDir::new().unwrap();
        let mut service = open(&temp);
        let path = temp.path().join("tasks.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let mut out = Vec::new();
        let result = execute(create("Task 1", today()), &mut service, &mut out);

        match result.as_ref().unwrap_err().downcast_ref::<Error>() {
            Some(Error::Storage { .. }) => {}
            other => panic!("Expected Storage error, got: {:?}", other),
        }
        assert!(out.is_empty());
        assert_eq!(exit_status(&result), 1);
        assert!(service.list_all().is_empty());
    }
}
