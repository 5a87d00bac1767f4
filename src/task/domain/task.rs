//! Task entity and the parameter objects used to create and edit it.

use super::{DueDate, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Caller-supplied fields of a task.
///
/// The store assigns the identifier and creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    /// Task title.
    pub title: String,
    /// Free-form description, possibly empty.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Due date.
    pub due_date: DueDate,
}

impl TaskData {
    /// Creates task data with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, status: TaskStatus, due_date: DueDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status,
            due_date,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update applied to an existing task.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement due date.
    pub due_date: Option<DueDate>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only changes the status.
    #[must_use]
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

impl From<TaskData> for TaskPatch {
    fn from(data: TaskData) -> Self {
        Self {
            title: Some(data.title),
            description: Some(data.description),
            status: Some(data.status),
            due_date: Some(data.due_date),
        }
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    due_date: DueDate,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier stamped with the clock's time.
    #[must_use]
    pub fn new(data: TaskData, clock: &impl Clock) -> Self {
        Self::with_created_at(data, clock.utc())
    }

    /// Creates a task with a fresh identifier and an explicit creation time.
    #[must_use]
    pub fn with_created_at(data: TaskData, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges the patch into this task.
    ///
    /// The identifier and creation time never change.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            description,
            status,
            due_date,
        } = patch;
        replace_if_some(&mut self.title, title);
        replace_if_some(&mut self.description, description);
        replace_if_some(&mut self.status, status);
        replace_if_some(&mut self.due_date, due_date);
    }
}

fn replace_if_some<T>(field: &mut T, value: Option<T>) {
    if let Some(new_value) = value {
        *field = new_value;
    }
}
