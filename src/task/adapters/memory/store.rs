//! In-memory task store preserving insertion order.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::task::{
    domain::{SeedTask, Task, TaskData, TaskId, TaskPatch},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Process-local task store owned by a single board session.
///
/// Tasks are kept in insertion order so column projections render in the
/// order tasks were created.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore<C = DefaultClock>
where
    C: Clock,
{
    tasks: Vec<Task>,
    clock: Arc<C>,
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock,
{
    /// Creates an empty store stamping creation times from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Creates a store pre-populated from seed tasks.
    ///
    /// Each seed receives a fresh identifier and keeps its own creation time.
    #[must_use]
    pub fn seeded(clock: Arc<C>, seeds: impl IntoIterator<Item = SeedTask>) -> Self {
        Self {
            tasks: seeds.into_iter().map(SeedTask::into_task).collect(),
            clock,
        }
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock,
{
    fn add(&mut self, data: TaskData) -> Task {
        let task = Task::new(data, &*self.clock);
        self.tasks.push(task.clone());
        task
    }

    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply(patch);
        Ok(task.clone())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }
}
