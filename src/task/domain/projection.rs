//! Read-only column views derived from the task collection.
//!
//! Projections are recomputed from a store snapshot on every call and keep
//! the snapshot's insertion order.

use super::{StatusOrder, Task, TaskStatus};
use serde::Serialize;

/// Returns the tasks whose status equals `status`, in input order.
#[must_use]
pub fn tasks_by_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status() == status)
        .cloned()
        .collect()
}

/// A task together with the moves the board may offer for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    task: Task,
    move_back: Option<TaskStatus>,
    move_forward: Option<TaskStatus>,
}

impl TaskCard {
    /// Wraps a task, resolving its neighbouring statuses through `order`.
    #[must_use]
    pub fn new(task: Task, order: &StatusOrder) -> Self {
        let move_back = order.previous(task.status());
        let move_forward = order.next(task.status());
        Self {
            task,
            move_back,
            move_forward,
        }
    }

    /// Returns the wrapped task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Status a backward move would reach, or `None` in the first column.
    #[must_use]
    pub const fn move_back(&self) -> Option<TaskStatus> {
        self.move_back
    }

    /// Status a forward move would reach, or `None` in the last column.
    #[must_use]
    pub const fn move_forward(&self) -> Option<TaskStatus> {
        self.move_forward
    }
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    status: TaskStatus,
    label: String,
    cards: Vec<TaskCard>,
}

impl BoardColumn {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }

    /// Returns how many tasks the column holds.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Whole-board projection with one column per status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    columns: Vec<BoardColumn>,
}

impl BoardView {
    /// Projects `tasks` into columns following `order`.
    #[must_use]
    pub fn project(tasks: &[Task], order: &StatusOrder) -> Self {
        let columns = order
            .statuses()
            .iter()
            .map(|status| BoardColumn {
                status: *status,
                label: status.label(),
                cards: tasks_by_status(tasks, *status)
                    .into_iter()
                    .map(|task| TaskCard::new(task, order))
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(BoardColumn::count).sum()
    }
}
