//! Store port holding the authoritative task collection.

use crate::task::domain::{Task, TaskData, TaskId, TaskPatch, TaskStatus};
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Authoritative, exclusively owned collection of tasks.
///
/// Stores perform no field validation; callers validate before mutating.
pub trait TaskStore {
    /// Creates a task, assigning a fresh identifier and the current time.
    fn add(&mut self, data: TaskData) -> Task;

    /// Merges `patch` into the task with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task>;

    /// Removes the task with identifier `id`.
    ///
    /// Returns the removed task, or `None` when nothing matched.
    fn remove(&mut self, id: TaskId) -> Option<Task>;

    /// Changes only the status of the task with identifier `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    fn set_status(&mut self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        self.update(id, TaskPatch::status_only(status))
    }

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Returns a snapshot of every task in insertion order.
    fn list(&self) -> Vec<Task>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
