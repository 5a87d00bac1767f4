//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::services::SubmitTaskRequest;

#[given("an empty task board")]
fn empty_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.service.list().is_empty(), "board should start empty");
    Ok(())
}

#[given(r#"a board with a task titled "{title}" in "{status}""#)]
fn board_with_task(
    world: &mut TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = SubmitTaskRequest::new(title, parse_status(&status)?, "2099-01-01");
    let created = world
        .service
        .add_task(request)
        .wrap_err("seed task for scenario")?
        .into_value();
    world.current_task = Some(created);
    Ok(())
}
