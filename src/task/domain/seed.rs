//! Seed catalogue used to pre-populate a board.
//!
//! Seeded tasks skip submit-time validation: they describe work that already
//! exists, so their due dates may lie in the past.

use super::{DueDate, Task, TaskData, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

const SAMPLE_BOARD: &str = r#"[
  {
    "title": "Develop Homepage UI",
    "description": "Design and implement the user interface for the main landing page, including responsive elements.",
    "status": "in-progress",
    "due_date": "2025-06-25",
    "created_at": "2025-06-10T10:00:00Z"
  },
  {
    "title": "Set up Database Schema",
    "description": "Define the database tables, relationships, and initial data for user authentication and task storage.",
    "status": "todo",
    "due_date": "2025-06-20",
    "created_at": "2025-06-12T14:30:00Z"
  },
  {
    "title": "Implement User Authentication",
    "description": "Create user registration, login, and session management functionalities.",
    "status": "todo",
    "due_date": "2025-07-05",
    "created_at": "2025-06-15T09:15:00Z"
  },
  {
    "title": "Write API Documentation",
    "description": "Document all REST API endpoints, including request/response formats and authentication requirements.",
    "status": "done",
    "due_date": "2025-06-14",
    "created_at": "2025-06-05T11:00:00Z"
  },
  {
    "title": "Plan Sprint 2 Tasks",
    "description": "Outline the tasks and stories for the next development sprint, prioritizing based on project roadmap.",
    "status": "in-progress",
    "due_date": "2025-06-28",
    "created_at": "2025-06-16T16:00:00Z"
  }
]"#;

/// Error raised when a seed document cannot be decoded.
#[derive(Debug, Error)]
#[error("invalid seed document: {0}")]
pub struct SeedError(#[from] serde_json::Error);

/// A task as described by a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedTask {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Due date in `YYYY-MM-DD` form.
    pub due_date: DueDate,
    /// Original creation instant.
    pub created_at: DateTime<Utc>,
}

impl SeedTask {
    /// Materialises the seed as a task with a fresh identifier.
    #[must_use]
    pub fn into_task(self) -> Task {
        let data = TaskData::new(self.title, self.status, self.due_date)
            .with_description(self.description);
        Task::with_created_at(data, self.created_at)
    }
}

/// Decodes a JSON array of seed tasks.
///
/// # Errors
///
/// Returns [`SeedError`] when the document is not a valid seed array.
pub fn load_seed(json: &str) -> Result<Vec<SeedTask>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Returns the five-task sample board.
///
/// # Errors
///
/// Returns [`SeedError`] if the embedded catalogue fails to decode.
pub fn sample_seed() -> Result<Vec<SeedTask>, SeedError> {
    load_seed(SAMPLE_BOARD)
}
