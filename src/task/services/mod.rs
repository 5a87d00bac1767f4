//! Application services for the task board.
//!
//! [`TaskBoardService`] is the command surface exposed to the presentation
//! layer: add, edit, delete and move tasks, plus the per-column views.

mod board;
mod config;
mod form;
mod notification;

pub use board::{SubmitTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService};
pub use config::{BoardConfig, BoardConfigError, BoardSeed};
pub use form::TaskForm;
pub use notification::{CommandOutcome, Notification, Severity};
