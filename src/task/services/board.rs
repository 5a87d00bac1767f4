//! Command handlers turning user intents into task store mutations.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::{BoardConfig, BoardSeed, CommandOutcome, Notification, TaskForm};
use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{
        BoardView, MoveDirection, SeedError, StatusOrder, Task, TaskData, TaskId, TaskPatch,
        TaskStatus, TaskValidationError, sample_seed, tasks_by_status, validation,
    },
    ports::{TaskStore, TaskStoreError},
};

/// Field values submitted from the create or edit dialog.
///
/// The due date is the raw `YYYY-MM-DD` string; it is parsed during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTaskRequest {
    title: String,
    description: String,
    status: TaskStatus,
    due_date: String,
}

impl SubmitTaskRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: TaskStatus,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status,
            due_date: due_date.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the submitted title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the submitted status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the raw submitted due date.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }
}

/// Service-level errors for board commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskBoardError {
    /// The submission failed field validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

impl TaskBoardError {
    /// Returns the feedback to show for this failure.
    #[must_use]
    pub const fn notification(&self) -> Notification {
        match self {
            Self::Validation(_) => Notification::InvalidSubmission,
            Self::Store(TaskStoreError::NotFound(_)) => Notification::TaskMissing,
        }
    }
}

/// Result type for board command handlers.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board command handlers over an exclusively owned store.
#[derive(Debug, Clone)]
pub struct TaskBoardService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    store: S,
    clock: Arc<C>,
    order: StatusOrder,
}

impl<C> TaskBoardService<InMemoryTaskStore<C>, C>
where
    C: Clock,
{
    /// Builds an in-memory board initialised as `config` describes.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the sample catalogue cannot be decoded.
    pub fn from_config(config: &BoardConfig, clock: Arc<C>) -> Result<Self, SeedError> {
        let store = match config.seed {
            BoardSeed::Empty => InMemoryTaskStore::new(Arc::clone(&clock)),
            BoardSeed::Sample => InMemoryTaskStore::seeded(Arc::clone(&clock), sample_seed()?),
        };
        info!(seed = ?config.seed, tasks = store.len(), "task board initialised");
        Ok(Self::new(store, clock))
    }
}

impl<S, C> TaskBoardService<S, C>
where
    S: TaskStore,
    C: Clock,
{
    /// Creates a board service over `store`, reading "today" from `clock`.
    #[must_use]
    pub const fn new(store: S, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            order: StatusOrder::CANONICAL,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the status ordering used for moves and columns.
    #[must_use]
    pub const fn status_order(&self) -> &StatusOrder {
        &self.order
    }

    /// Validates and adds a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Validation`] when the title is blank or the
    /// due date is malformed or in the past; the store is left untouched.
    #[instrument(skip(self, request), fields(status = %request.status))]
    pub fn add_task(
        &mut self,
        request: SubmitTaskRequest,
    ) -> TaskBoardResult<CommandOutcome<Task>> {
        let data = self.validated_data(request)?;
        let task = self.store.add(data);
        info!(task_id = %task.id(), "task created");
        Ok(CommandOutcome::notify(task, Notification::TaskCreated))
    }

    /// Validates and replaces the editable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Validation`] for an invalid submission, or
    /// [`TaskBoardError::Store`] when the task does not exist.
    #[instrument(skip(self, request), fields(task_id = %id, status = %request.status))]
    pub fn edit_task(
        &mut self,
        id: TaskId,
        request: SubmitTaskRequest,
    ) -> TaskBoardResult<CommandOutcome<Task>> {
        let data = self.validated_data(request)?;
        let task = self.store.update(id, TaskPatch::from(data))?;
        info!("task updated");
        Ok(CommandOutcome::notify(task, Notification::TaskUpdated))
    }

    /// Submits the authoring dialog, editing when the form was opened for an
    /// existing task and adding otherwise.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::add_task`] and [`Self::edit_task`].
    pub fn submit_form(&mut self, form: &TaskForm) -> TaskBoardResult<CommandOutcome<Task>> {
        let request = form.to_request();
        match form.editing() {
            Some(id) => self.edit_task(id, request),
            None => self.add_task(request),
        }
    }

    /// Removes a task from the board.
    ///
    /// Deleting an unknown task is not an error; the deletion is still
    /// reported.
    #[instrument(skip(self), fields(task_id = %id))]
    pub fn delete_task(&mut self, id: TaskId) -> CommandOutcome<Option<Task>> {
        let removed = self.store.remove(id);
        if removed.is_some() {
            info!("task deleted");
        } else {
            debug!("delete ignored, task not on board");
        }
        CommandOutcome::notify(removed, Notification::TaskDeleted)
    }

    /// Moves a task one column in `direction`.
    ///
    /// At the first or last column the move is a no-op: the outcome carries
    /// `None` and no notification.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the task does not exist.
    #[instrument(skip(self), fields(task_id = %id, direction = %direction))]
    pub fn change_status(
        &mut self,
        id: TaskId,
        direction: MoveDirection,
    ) -> TaskBoardResult<CommandOutcome<Option<Task>>> {
        let current = self
            .store
            .find_by_id(id)
            .ok_or(TaskStoreError::NotFound(id))?
            .status();
        let Some(target) = self.order.step(current, direction) else {
            debug!(status = %current, "move ignored at board edge");
            return Ok(CommandOutcome::silent(None));
        };
        let task = self.store.set_status(id, target)?;
        info!(from = %current, to = %target, "task status changed");
        Ok(CommandOutcome::notify(
            Some(task),
            Notification::StatusChanged(target),
        ))
    }

    /// Returns the tasks in one column, in creation order.
    #[must_use]
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        tasks_by_status(&self.store.list(), status)
    }

    /// Returns a snapshot of every task.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<Task> {
        self.store.find_by_id(id)
    }

    /// Projects the whole board into its status columns.
    #[must_use]
    pub fn board(&self) -> BoardView {
        BoardView::project(&self.store.list(), &self.order)
    }

    /// Returns today's date as used by due-date validation.
    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        validation::today(&*self.clock)
    }

    fn validated_data(
        &self,
        request: SubmitTaskRequest,
    ) -> Result<TaskData, TaskValidationError> {
        let SubmitTaskRequest {
            title,
            description,
            status,
            due_date,
        } = request;
        let parsed_due_date = validation::validate_submission(&title, &due_date, self.today())
            .inspect_err(|err| {
                warn!(
                    title_error = ?err.title(),
                    due_date_error = ?err.due_date(),
                    "task submission rejected"
                );
            })?;
        Ok(TaskData::new(title, status, parsed_due_date).with_description(description))
    }
}
