//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::task::services::{Notification, TaskBoardError};

fn last_notification(world: &TaskBoardWorld) -> Result<Option<Notification>, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(notification)) => Ok(*notification),
        Some(Err(err)) => Err(eyre::eyre!("expected a successful command, got {err:?}")),
        None => Err(eyre::eyre!("no command has run")),
    }
}

fn is_listed_under(world: &TaskBoardWorld, status: &str) -> Result<bool, eyre::Report> {
    let id = world.current_task()?.id();
    Ok(world
        .service
        .list_by_status(parse_status(status)?)
        .iter()
        .any(|task| task.id() == id))
}

#[then(r#"the task is listed under "{status}""#)]
fn task_listed_under(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        is_listed_under(world, &status)?,
        "task missing from column {status}"
    );
    Ok(())
}

#[then(r#"the task is not listed under "{status}""#)]
fn task_not_listed_under(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !is_listed_under(world, &status)?,
        "task unexpectedly in column {status}"
    );
    Ok(())
}

#[then(r#"the last notification reads "{message}""#)]
fn notification_reads(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let notification =
        last_notification(world)?.ok_or_else(|| eyre::eyre!("no notification was raised"))?;
    eyre::ensure!(
        notification.to_string() == message,
        "expected {message:?}, found {:?}",
        notification.to_string()
    );
    Ok(())
}

#[then(r#"the last notification announces status "{status}""#)]
fn notification_announces_status(
    world: &TaskBoardWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = Notification::StatusChanged(parse_status(&status)?);
    let found = last_notification(world)?;
    eyre::ensure!(
        found == Some(expected),
        "expected {expected:?}, found {found:?}"
    );
    Ok(())
}

#[then("no notification is raised")]
fn no_notification(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let found = last_notification(world)?;
    eyre::ensure!(found.is_none(), "unexpected notification {found:?}");
    Ok(())
}

#[then(r#"the submission is rejected because "{message}""#)]
fn submission_rejected(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let Some(Err(TaskBoardError::Validation(err))) = world.last_result.as_ref() else {
        return Err(eyre::eyre!(
            "expected a validation error, got {:?}",
            world.last_result
        ));
    };
    let reasons: Vec<String> = [err.title(), err.due_date()]
        .into_iter()
        .flatten()
        .map(ToString::to_string)
        .collect();
    eyre::ensure!(
        reasons.contains(&message),
        "expected {message:?} among {reasons:?}"
    );
    Ok(())
}

#[then("the board is empty")]
fn board_is_empty(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.service.list().is_empty(), "board is not empty");
    Ok(())
}

#[then("the board still holds {count:usize} task")]
fn board_holds(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.service.list().len();
    eyre::ensure!(found == count, "expected {count} tasks, found {found}");
    Ok(())
}
