//! Task service
//!
//! Enforces the task business rules on top of a [`TaskRepository`]. The list
//! is loaded once when the service is opened and written back in full after
//! every successful mutation.

use chrono::{Local, NaiveDate};

use super::file_store::FileTaskStore;
use super::model::{non_blank, CreateTask, Task, UpdateTask};
use super::repository::{next_id, TaskRepository};
use crate::config::StoreConfig;
use crate::error::{Error, ValidationError};
use crate::Result;

type Clock = Box<dyn Fn() -> NaiveDate>;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// CRUD operations over the task list
pub struct TaskService<R: TaskRepository = FileTaskStore> {
    repo: R,
    tasks: Vec<Task>,
    /// Never recomputed after load, so deleted ids are not handed out again
    next_id: u64,
    today: Clock,
}

impl TaskService<FileTaskStore> {
    /// Open the JSON file named by `config`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        Self::with_repository(FileTaskStore::from_config(config))
    }
}

impl<R: TaskRepository> TaskService<R> {
    /// Load every task from `repo`
    pub fn with_repository(repo: R) -> Result<Self> {
        let tasks = repo.load()?;
        let next_id = next_id(&tasks).ok_or(Error::IdsExhausted(u64::MAX))?;
        Ok(Self {
            repo,
            tasks,
            next_id,
            today: Box::new(local_today),
        })
    }

    /// Replace the source of "today" used for due-date checks
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Self {
        self.today = Box::new(today);
        self
    }

    /// All tasks in insertion order
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn create_task(&mut self, input: CreateTask) -> Result<Task> {
        let title = non_blank(Some(input.title)).ok_or(ValidationError::MissingField("title"))?;
        let description = non_blank(Some(input.description))
            .ok_or(ValidationError::MissingField("description"))?;
        let due_date = input.due_date.ok_or(ValidationError::MissingField("dueDate"))?;
        self.check_due_date(due_date)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(Error::IdsExhausted(self.next_id))?;

        let task = Task::new(self.next_id, title, description, due_date);
        self.tasks.push(task.clone());
        if let Err(e) = self.repo.save(&self.tasks) {
            self.tasks.pop();
            return Err(e);
        }
        self.next_id = following;

        tracing::info!(id = task.id, "Task created");
        Ok(task)
    }

    /// Apply a partial update.
    ///
    /// The due date is validated before any field changes, so a rejected
    /// update leaves the task untouched.
    pub fn update_task(&mut self, id: u64, changes: UpdateTask) -> Result<Task> {
        let index = self.position(id)?;
        if let Some(due_date) = changes.due_date {
            self.check_due_date(due_date)?;
        }

        let previous = self.tasks[index].clone();
        changes.apply_to(&mut self.tasks[index]);
        if let Err(e) = self.repo.save(&self.tasks) {
            self.tasks[index] = previous;
            return Err(e);
        }

        tracing::info!(id, "Task updated");
        Ok(self.tasks[index].clone())
    }

    pub fn delete_task(&mut self, id: u64) -> Result<()> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        if let Err(e) = self.repo.save(&self.tasks) {
            self.tasks.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id, "Task deleted");
        Ok(())
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.tasks.iter().position(|t| t.id == id).ok_or_else(|| {
            tracing::warn!(id, "Task not found");
            Error::TaskNotFound(id)
        })
    }

    fn check_due_date(&self, due_date: NaiveDate) -> Result<()> {
        let today = (self.today)();
        if due_date < today {
            tracing::warn!(%due_date, %today, "Rejected due date in the past");
            return Err(ValidationError::DueDateInPast { due_date, today }.into());
        }
        Ok(())
    }
}
