//! When steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{MoveDirection, TaskId},
    services::SubmitTaskRequest,
};

fn submit(world: &mut TaskBoardWorld, request: SubmitTaskRequest) {
    let result = world.service.add_task(request);
    if let Ok(ref outcome) = result {
        world.current_task = Some(outcome.value().clone());
    }
    world.last_result = Some(result.map(|outcome| outcome.notification()));
}

#[when(r#"a task titled "{title}" due "{due_date}" is added to "{status}""#)]
fn add_task(
    world: &mut TaskBoardWorld,
    title: String,
    due_date: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = SubmitTaskRequest::new(title, parse_status(&status)?, due_date);
    submit(world, request);
    Ok(())
}

#[when(r#"a task without a title is added to "{status}""#)]
fn add_untitled_task(world: &mut TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let request = SubmitTaskRequest::new("", parse_status(&status)?, "2099-01-01")
        .with_description("x");
    submit(world, request);
    Ok(())
}

#[when(r#"the task is moved "{direction}""#)]
fn move_task(world: &mut TaskBoardWorld, direction: String) -> Result<(), eyre::Report> {
    let parsed = MoveDirection::try_from(direction.as_str())
        .map_err(|err| eyre::eyre!("invalid direction in scenario: {err}"))?;
    let id = world.current_task()?.id();
    let result = world.service.change_status(id, parsed);
    world.last_result = Some(result.map(|outcome| outcome.notification()));
    Ok(())
}

#[when("an unknown task is deleted")]
fn delete_unknown_task(world: &mut TaskBoardWorld) {
    let outcome = world.service.delete_task(TaskId::new());
    world.last_result = Some(Ok(outcome.notification()));
}
