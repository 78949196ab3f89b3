//! Reorder/reparent state machine driven by drag events.
//!
//! Task ownership and order are recomputed live on every drag-over; column
//! order is only committed on drag-end. Every transform builds fresh
//! sequences and returns `None` when the board is left unchanged.

use crate::board::domain::{Board, ColumnId, Task, TaskId};
use crate::drag::domain::{DragEvent, DragItem, DragSession};
use tracing::{debug, trace};

/// Result of applying one drag event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The reordered board, or `None` when the board is unchanged.
    pub board: Option<Board>,
    /// The session to install, or `None` to keep the current one.
    pub session: Option<DragSession>,
}

/// Applies `event` to `board`.
///
/// # Examples
///
/// ```
/// use kanban_board::board::domain::{Board, Column, ColumnId};
/// use kanban_board::drag::domain::{DragEvent, DragItem, DragSession};
/// use kanban_board::drag::engine::apply;
///
/// let board = Board::from_parts(
///     vec![
///         Column::new(ColumnId::new("x"), "X"),
///         Column::new(ColumnId::new("y"), "Y"),
///     ],
///     Vec::new(),
/// );
/// let transition = apply(
///     &board,
///     &DragEvent::End {
///         active: DragItem::Column(ColumnId::new("x")),
///         over: Some(DragItem::Column(ColumnId::new("y"))),
///     },
/// );
///
/// assert_eq!(transition.session, Some(DragSession::Idle));
/// let reordered = transition.board.expect("columns reordered");
/// assert_eq!(reordered.columns()[0].id().as_str(), "y");
/// ```
#[must_use]
pub fn apply(board: &Board, event: &DragEvent) -> Transition {
    match event {
        DragEvent::Start { active } => Transition {
            board: None,
            session: Some(DragSession::started(active)),
        },
        DragEvent::Over { active, over } => Transition {
            board: drag_over(board, active, over.as_ref()),
            session: None,
        },
        DragEvent::End { active, over } => Transition {
            board: drag_end(board, active, over.as_ref()),
            session: Some(DragSession::Idle),
        },
    }
}

/// Recomputes task order and ownership while `active` hovers `over`.
///
/// Only task drags reorder here. A task over a task in the same column takes
/// the target's index. A task over a task in another column joins that
/// column one slot before the target's index, clamped at zero. A task over a
/// column joins the column without changing its sequence index.
#[must_use]
pub fn drag_over(board: &Board, active: &DragItem, over: Option<&DragItem>) -> Option<Board> {
    let Some(target) = over else {
        trace!(active = active.id_str(), "drag over outside any target ignored");
        return None;
    };
    if active.same_id(target) {
        return None;
    }
    let DragItem::Task(active_id) = active else {
        return None;
    };

    match target {
        DragItem::Task(over_id) => move_task_over_task(board, active_id, over_id),
        DragItem::Column(column_id) => move_task_over_column(board, active_id, column_id),
    }
}

/// Finalises a drag. Columns are relocated to the drop target's index; task
/// drags were already applied by [`drag_over`].
///
/// A column released over a task is treated as released over the column
/// owning that task.
#[must_use]
pub fn drag_end(board: &Board, active: &DragItem, over: Option<&DragItem>) -> Option<Board> {
    let Some(target) = over else {
        trace!(active = active.id_str(), "drag released outside any target");
        return None;
    };
    if active.same_id(target) {
        return None;
    }
    let DragItem::Column(active_id) = active else {
        return None;
    };

    let target_column = match target {
        DragItem::Column(id) => id,
        DragItem::Task(id) => board.task(id)?.column_id(),
    };
    let from = board.column_index(active_id)?;
    let to = board.column_index(target_column)?;
    if from == to {
        return None;
    }

    debug!(column_id = %active_id, from, to, "column moved");
    Some(board.with_columns(array_move(board.columns(), from, to)))
}

fn move_task_over_task(board: &Board, active_id: &TaskId, over_id: &TaskId) -> Option<Board> {
    let active_index = board.task_index(active_id)?;
    let over_index = board.task_index(over_id)?;
    let active_task = board.tasks().get(active_index)?;
    let target_column = board.tasks().get(over_index)?.column_id();

    if active_task.is_in(target_column) {
        debug!(task_id = %active_id, from = active_index, to = over_index, "task reordered");
        return Some(board.with_tasks(array_move(board.tasks(), active_index, over_index)));
    }

    let to = over_index.saturating_sub(1);
    debug!(
        task_id = %active_id,
        column_id = %target_column,
        from = active_index,
        to,
        "task moved across columns"
    );
    let reassigned = reassign(board.tasks(), active_index, target_column);
    Some(board.with_tasks(array_move(&reassigned, active_index, to)))
}

fn move_task_over_column(board: &Board, active_id: &TaskId, column_id: &ColumnId) -> Option<Board> {
    board.column(column_id)?;
    let active_index = board.task_index(active_id)?;
    if board.tasks().get(active_index)?.is_in(column_id) {
        return None;
    }

    debug!(task_id = %active_id, column_id = %column_id, "task dropped on column");
    Some(board.with_tasks(reassign(board.tasks(), active_index, column_id)))
}

/// Returns a copy of `tasks` where the task at `index` is owned by
/// `column_id`.
fn reassign(tasks: &[Task], index: usize, column_id: &ColumnId) -> Vec<Task> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| {
            if position == index {
                task.reassigned_to(column_id.clone())
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Moves the element at `from` to `to`, shifting the elements in between by
/// one.
///
/// `to` is clamped to the last position. An out-of-range `from` returns an
/// unchanged copy.
///
/// # Examples
///
/// ```
/// use kanban_board::drag::engine::array_move;
///
/// assert_eq!(array_move(&['a', 'b', 'c'], 0, 2), vec!['b', 'c', 'a']);
/// assert_eq!(array_move(&['a', 'b', 'c'], 2, 0), vec!['c', 'a', 'b']);
/// ```
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let Some(moved) = items.get(from) else {
        return items.to_vec();
    };
    let mut reordered: Vec<T> = items
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != from)
        .map(|(_, item)| item.clone())
        .collect();
    let target = to.min(reordered.len());
    reordered.insert(target, moved.clone());
    reordered
}
