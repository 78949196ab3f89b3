//! When steps for drag reordering BDD scenarios.

use super::world::DragWorld;
use kanban_board::board::domain::{ColumnId, TaskId};
use kanban_board::drag::domain::DragItem;
use rstest_bdd_macros::when;

fn task(id: String) -> DragItem {
    DragItem::Task(TaskId::new(id))
}

fn column(id: String) -> DragItem {
    DragItem::Column(ColumnId::new(id))
}

#[when(r#"task "{active}" is dragged over task "{over}""#)]
fn task_dragged_over_task(world: &mut DragWorld, active: String, over: String) {
    world.service.drag_start(task(active.clone()));
    world.service.drag_over(task(active), Some(task(over)));
}

#[when(r#"task "{active}" is dragged over column "{over}""#)]
fn task_dragged_over_column(world: &mut DragWorld, active: String, over: String) {
    world.service.drag_start(task(active.clone()));
    world.service.drag_over(task(active), Some(column(over)));
}

#[when(r#"the drag of task "{active}" is released over task "{over}""#)]
fn task_released_over_task(world: &mut DragWorld, active: String, over: String) {
    world.service.drag_end(task(active), Some(task(over)));
}

#[when(r#"task "{active}" is dragged and released over task "{over}""#)]
fn task_dragged_and_released(world: &mut DragWorld, active: String, over: String) {
    world.service.drag_start(task(active.clone()));
    world
        .service
        .drag_over(task(active.clone()), Some(task(over.clone())));
    world.service.drag_end(task(active), Some(task(over)));
}

#[when(r#"column "{active}" is dragged and released over column "{over}""#)]
fn column_dragged_and_released(world: &mut DragWorld, active: String, over: String) {
    world.service.drag_start(column(active.clone()));
    world
        .service
        .drag_over(column(active.clone()), Some(column(over.clone())));
    world.service.drag_end(column(active), Some(column(over)));
}

#[when(r#"column "{id}" is deleted"#)]
fn column_deleted(world: &mut DragWorld, id: String) {
    world.service.delete_column(&ColumnId::new(id));
}
