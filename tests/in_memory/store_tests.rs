//! In-memory integration tests for the task store contract.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DueDate, TaskData, TaskId, TaskPatch, TaskStatus, sample_seed},
    ports::{TaskStore, TaskStoreError},
};

#[fixture]
fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new(Arc::new(DefaultClock))
}

fn due(year: i32, month: u32, day: u32) -> DueDate {
    DueDate::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"))
}

#[rstest]
fn list_returns_tasks_in_insertion_order(mut store: InMemoryTaskStore) {
    let titles = ["alpha", "beta", "gamma"];
    for title in titles {
        store.add(TaskData::new(title, TaskStatus::Todo, due(2099, 1, 1)));
    }

    let listed: Vec<String> = store
        .list()
        .iter()
        .map(|task| task.title().to_owned())
        .collect();
    assert_eq!(listed, titles);
}

#[rstest]
fn list_is_a_snapshot(mut store: InMemoryTaskStore) {
    let task = store.add(TaskData::new("snap", TaskStatus::Todo, due(2099, 1, 1)));
    let snapshot = store.list();

    store
        .set_status(task.id(), TaskStatus::Done)
        .expect("task exists");

    assert_eq!(snapshot.first().map(|t| t.status()), Some(TaskStatus::Todo));
    assert_eq!(
        store.find_by_id(task.id()).map(|t| t.status()),
        Some(TaskStatus::Done)
    );
}

#[rstest]
fn update_merges_only_given_fields(mut store: InMemoryTaskStore) {
    let task = store.add(
        TaskData::new("original", TaskStatus::Todo, due(2099, 1, 1)).with_description("keep"),
    );

    let updated = store
        .update(task.id(), TaskPatch::new().with_title("renamed"))
        .expect("task exists");

    assert_eq!(updated.title(), "renamed");
    assert_eq!(updated.description(), "keep");
    assert_eq!(updated.status(), TaskStatus::Todo);
    assert_eq!(updated.id(), task.id());
    assert_eq!(updated.created_at(), task.created_at());
}

#[rstest]
fn empty_patch_returns_the_stored_task_unchanged(mut store: InMemoryTaskStore) {
    let task = store.add(
        TaskData::new("steady", TaskStatus::InProgress, due(2099, 1, 1)).with_description("same"),
    );

    let updated = store.update(task.id(), TaskPatch::new());

    assert_eq!(updated, Ok(task.clone()));
    assert_eq!(store.find_by_id(task.id()), Some(task));
}

#[rstest]
fn update_and_set_status_fail_for_unknown_task(mut store: InMemoryTaskStore) {
    let missing = TaskId::new();

    assert_eq!(
        store.update(missing, TaskPatch::new().with_title("x")),
        Err(TaskStoreError::NotFound(missing))
    );
    assert_eq!(
        store.set_status(missing, TaskStatus::Done),
        Err(TaskStoreError::NotFound(missing))
    );
}

#[rstest]
fn remove_is_a_no_op_for_unknown_task(mut store: InMemoryTaskStore) {
    store.add(TaskData::new("stay", TaskStatus::Todo, due(2099, 1, 1)));

    assert!(store.remove(TaskId::new()).is_none());
    assert_eq!(store.len(), 1);
}

#[rstest]
fn removed_task_cannot_be_found(mut store: InMemoryTaskStore) {
    let task = store.add(TaskData::new("gone", TaskStatus::Done, due(2099, 1, 1)));

    assert_eq!(store.remove(task.id()).map(|t| t.id()), Some(task.id()));
    assert!(store.find_by_id(task.id()).is_none());
    assert!(store.is_empty());
}

#[rstest]
fn seeded_store_assigns_unique_ids() {
    let seeds = sample_seed().expect("sample catalogue decodes");
    let store = InMemoryTaskStore::seeded(Arc::new(DefaultClock), seeds);

    let mut ids: Vec<TaskId> = store.list().iter().map(|task| task.id()).collect();
    ids.sort_by_key(|id| id.into_inner());
    ids.dedup();
    assert_eq!(ids.len(), 5);
}
