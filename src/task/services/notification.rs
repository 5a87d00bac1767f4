//! Feedback values returned by board commands.
//!
//! Commands never display anything themselves: they hand back a
//! [`Notification`] and the presentation layer decides how to show it.

use crate::task::domain::TaskStatus;
use serde::Serialize;
use std::fmt;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The command took effect.
    Success,
    /// The command was rejected.
    Error,
}

/// Transient message describing the outcome of the last command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "status", rename_all = "snake_case")]
pub enum Notification {
    /// A task was added to the board.
    TaskCreated,
    /// A task's fields were edited.
    TaskUpdated,
    /// A delete command ran.
    TaskDeleted,
    /// A task moved to another column.
    StatusChanged(TaskStatus),
    /// A submission failed field validation.
    InvalidSubmission,
    /// The command referenced a task that is not on the board.
    TaskMissing,
}

impl Notification {
    /// Returns the presentation severity.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::TaskCreated | Self::TaskUpdated | Self::TaskDeleted | Self::StatusChanged(_) => {
                Severity::Success
            }
            Self::InvalidSubmission | Self::TaskMissing => Severity::Error,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskCreated => f.write_str("Task created successfully!"),
            Self::TaskUpdated => f.write_str("Task updated successfully!"),
            Self::TaskDeleted => f.write_str("Task deleted successfully!"),
            Self::StatusChanged(status) => write!(f, "Task status updated to \"{status}\"!"),
            Self::InvalidSubmission => f.write_str("Please fix the errors in the form"),
            Self::TaskMissing => f.write_str("Task not found"),
        }
    }
}

/// Value produced by a successful command plus its feedback, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome<T> {
    value: T,
    notification: Option<Notification>,
}

impl<T> CommandOutcome<T> {
    /// Creates an outcome that reports `notification`.
    #[must_use]
    pub const fn notify(value: T, notification: Notification) -> Self {
        Self {
            value,
            notification: Some(notification),
        }
    }

    /// Creates an outcome with nothing to report.
    #[must_use]
    pub const fn silent(value: T) -> Self {
        Self {
            value,
            notification: None,
        }
    }

    /// Returns the command's value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the feedback to show, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<Notification> {
        self.notification
    }

    /// Consumes the outcome, returning the command's value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}
