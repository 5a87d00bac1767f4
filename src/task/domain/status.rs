//! Task statuses and the policy that orders them into board columns.

use super::{ParseMoveDirectionError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task currently sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column heading, e.g. `In Progress`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str()
            .split('-')
            .map(capitalise)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Direction of a single-step status move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Towards `done`.
    Forward,
    /// Towards `todo`.
    Backward,
}

impl MoveDirection {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MoveDirection {
    type Error = ParseMoveDirectionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "forward" => Ok(Self::Forward),
            "backward" => Ok(Self::Backward),
            _ => Err(ParseMoveDirectionError(value.to_owned())),
        }
    }
}

/// Fixed ordering of statuses used to resolve single-step moves.
///
/// The first status has no backward neighbour and the last has no forward
/// neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOrder {
    sequence: [TaskStatus; 3],
}

impl StatusOrder {
    /// `todo` → `in-progress` → `done`.
    pub const CANONICAL: Self = Self {
        sequence: [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done],
    };

    /// Returns every status in column order.
    #[must_use]
    pub const fn statuses(&self) -> &[TaskStatus] {
        &self.sequence
    }

    /// Returns the status one step before `status`, or `None` at the start.
    #[must_use]
    pub fn previous(&self, status: TaskStatus) -> Option<TaskStatus> {
        let position = self.position(status)?;
        let earlier = position.checked_sub(1)?;
        self.sequence.get(earlier).copied()
    }

    /// Returns the status one step after `status`, or `None` at the end.
    #[must_use]
    pub fn next(&self, status: TaskStatus) -> Option<TaskStatus> {
        let position = self.position(status)?;
        self.sequence.get(position + 1).copied()
    }

    /// Resolves the neighbour of `status` in the given direction.
    #[must_use]
    pub fn step(&self, status: TaskStatus, direction: MoveDirection) -> Option<TaskStatus> {
        match direction {
            MoveDirection::Forward => self.next(status),
            MoveDirection::Backward => self.previous(status),
        }
    }

    fn position(&self, status: TaskStatus) -> Option<usize> {
        self.sequence.iter().position(|candidate| *candidate == status)
    }
}

impl Default for StatusOrder {
    fn default() -> Self {
        Self::CANONICAL
    }
}
