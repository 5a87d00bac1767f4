//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskStatus},
    services::{Notification, TaskBoardError, TaskBoardService},
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryTaskStore<DefaultClock>, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub service: TestBoardService,
    pub current_task: Option<Task>,
    pub last_result: Option<Result<Option<Notification>, TaskBoardError>>,
}

impl TaskBoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let service = TaskBoardService::new(InMemoryTaskStore::new(Arc::clone(&clock)), clock);

        Self {
            service,
            current_task: None,
            last_result: None,
        }
    }

    /// Returns the task the scenario is following.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses a status named in a feature file.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
