//! Then steps for drag reordering BDD scenarios.

use super::world::{DragWorld, id_list};
use crate::test_helpers::{column_order, column_task_ids};
use kanban_board::board::domain::TaskId;
use rstest_bdd_macros::then;

#[then(r#"column "{column}" lists tasks "{tasks}""#)]
fn column_lists_tasks(
    world: &DragWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    let actual = column_task_ids(world.service.board(), &column);
    let expected = id_list(&tasks);
    eyre::ensure!(
        actual == expected,
        "column {column}: expected tasks {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"task "{task}" belongs to column "{column}""#)]
fn task_belongs_to_column(
    world: &DragWorld,
    task: String,
    column: String,
) -> Result<(), eyre::Report> {
    let found = world
        .service
        .board()
        .task(&TaskId::new(task.clone()))
        .ok_or_else(|| eyre::eyre!("task {task} missing from board"))?;
    eyre::ensure!(
        found.column_id().as_str() == column,
        "task {task}: expected column {column}, found {}",
        found.column_id()
    );
    Ok(())
}

#[then(r#"task "{task}" no longer exists"#)]
fn task_no_longer_exists(world: &DragWorld, task: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.board().task(&TaskId::new(task.clone())).is_none(),
        "task {task} still on board"
    );
    Ok(())
}

#[then(r#"the column order is "{order}""#)]
fn the_column_order_is(world: &DragWorld, order: String) -> Result<(), eyre::Report> {
    let actual = column_order(world.service.board());
    let expected = id_list(&order);
    eyre::ensure!(
        actual == expected,
        "expected column order {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("no drag is in progress")]
fn no_drag_in_progress(world: &DragWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.drag_session().is_idle(),
        "drag session still active: {:?}",
        world.service.drag_session()
    );
    Ok(())
}

#[then("the board is unchanged")]
fn the_board_is_unchanged(world: &DragWorld) -> Result<(), eyre::Report> {
    let initial = world
        .initial
        .as_ref()
        .ok_or_else(|| eyre::eyre!("scenario world was not seeded"))?;
    eyre::ensure!(
        world.service.board() == initial,
        "board changed: {:?}",
        world.service.board()
    );
    Ok(())
}
