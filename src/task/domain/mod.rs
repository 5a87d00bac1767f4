//! Domain model for the task board.
//!
//! Tasks, their statuses and the ordering policy between statuses, field
//! validation, and the per-column projection. Nothing here touches storage
//! or presentation.

mod due_date;
mod error;
mod ids;
mod projection;
mod seed;
mod status;
mod task;
pub mod validation;

pub use due_date::DueDate;
pub use error::{
    ParseMoveDirectionError, ParseTaskStatusError, TaskFieldError, TaskValidationError,
};
pub use ids::TaskId;
pub use projection::{BoardColumn, BoardView, TaskCard, tasks_by_status};
pub use seed::{SeedError, SeedTask, load_seed, sample_seed};
pub use status::{MoveDirection, StatusOrder, TaskStatus};
pub use task::{Task, TaskData, TaskPatch};
