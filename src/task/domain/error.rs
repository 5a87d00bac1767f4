//! Error types for task field validation and parsing.

use thiserror::Error;

/// A single failed field rule.
///
/// The display string is the message shown next to the offending field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskFieldError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// The due date lies before the current calendar date.
    #[error("Due date cannot be in the past")]
    DueDateInPast,

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("Due date must be a date in YYYY-MM-DD form")]
    MalformedDueDate(String),
}

/// Rejected task submission, carrying the failure of every invalid field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Please fix the errors in the form")]
pub struct TaskValidationError {
    title: Option<TaskFieldError>,
    due_date: Option<TaskFieldError>,
}

impl TaskValidationError {
    /// Creates a validation error from the failure of each field.
    #[must_use]
    pub const fn new(title: Option<TaskFieldError>, due_date: Option<TaskFieldError>) -> Self {
        Self { title, due_date }
    }

    /// Builds a validation error from per-field outcomes.
    ///
    /// Returns `None` when both fields passed.
    #[must_use]
    pub fn from_fields(
        title: Option<TaskFieldError>,
        due_date: Option<TaskFieldError>,
    ) -> Option<Self> {
        if title.is_none() && due_date.is_none() {
            return None;
        }
        Some(Self { title, due_date })
    }

    /// Returns the title failure, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TaskFieldError> {
        self.title.as_ref()
    }

    /// Returns the due date failure, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<&TaskFieldError> {
        self.due_date.as_ref()
    }
}

/// Error returned while parsing a task status from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a move direction from its wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move direction: {0}, expected forward or backward")]
pub struct ParseMoveDirectionError(pub String);
