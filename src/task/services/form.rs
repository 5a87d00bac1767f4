//! State of the create/edit dialog.
//!
//! Each setter re-checks only the field it changed so errors can be flagged
//! while the user types. Submission still goes through the full validation
//! gate in [`TaskBoardService`](super::TaskBoardService).

use chrono::NaiveDate;

use super::SubmitTaskRequest;
use crate::task::domain::{
    DueDate, Task, TaskFieldError, TaskId, TaskStatus, TaskValidationError, validation,
};

/// Raw field values and per-field errors of the authoring dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    editing: Option<TaskId>,
    title: String,
    description: String,
    status: TaskStatus,
    due_date: String,
    title_error: Option<TaskFieldError>,
    due_date_error: Option<TaskFieldError>,
}

impl TaskForm {
    /// Opens an empty form for a new task, due today and in `todo`.
    #[must_use]
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Todo,
            due_date: DueDate::new(today).to_string(),
            title_error: None,
            due_date_error: None,
        }
    }

    /// Opens a form pre-filled from an existing task.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id()),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
            due_date: task.due_date().to_string(),
            title_error: None,
            due_date_error: None,
        }
    }

    /// Returns the task being edited, or `None` when creating.
    #[must_use]
    pub const fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    /// Returns the current title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the current due date input.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Replaces the title and re-checks it.
    pub fn set_title(&mut self, title: impl Into<String>) -> Option<&TaskFieldError> {
        self.title = title.into();
        self.title_error = validation::validate_title(&self.title).err();
        self.title_error.as_ref()
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Selects a status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Replaces the due date and re-checks it against `today`.
    pub fn set_due_date(
        &mut self,
        due_date: impl Into<String>,
        today: NaiveDate,
    ) -> Option<&TaskFieldError> {
        self.due_date = due_date.into();
        self.due_date_error = validation::validate_raw_due_date(&self.due_date, today).err();
        self.due_date_error.as_ref()
    }

    /// Returns the currently flagged field errors, if any.
    #[must_use]
    pub fn errors(&self) -> Option<TaskValidationError> {
        TaskValidationError::from_fields(self.title_error.clone(), self.due_date_error.clone())
    }

    /// Shows every field error of a rejected submission.
    pub fn show_errors(&mut self, error: &TaskValidationError) {
        self.title_error = error.title().cloned();
        self.due_date_error = error.due_date().cloned();
    }

    /// Builds the submission for the current field values.
    #[must_use]
    pub fn to_request(&self) -> SubmitTaskRequest {
        SubmitTaskRequest::new(self.title.clone(), self.status, self.due_date.clone())
            .with_description(self.description.clone())
    }
}
