//! Active-drag tracking and overlay resolution.

use super::DragItem;
use crate::board::domain::{Board, Column, ColumnId, Task, TaskId};
use serde::Serialize;

/// Which element, if any, is being dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum DragSession {
    /// Nothing is being dragged.
    #[default]
    Idle,
    /// A column is being dragged.
    DraggingColumn(ColumnId),
    /// A task is being dragged.
    DraggingTask(TaskId),
}

impl DragSession {
    /// Returns the session that starts when `active` is picked up.
    #[must_use]
    pub fn started(active: &DragItem) -> Self {
        match active {
            DragItem::Column(id) => Self::DraggingColumn(id.clone()),
            DragItem::Task(id) => Self::DraggingTask(id.clone()),
        }
    }

    /// Returns `true` when nothing is being dragged.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the dragged element, if any.
    #[must_use]
    pub fn active(&self) -> Option<DragItem> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(id) => Some(DragItem::Column(id.clone())),
            Self::DraggingTask(id) => Some(DragItem::Task(id.clone())),
        }
    }

    /// Resolves the floating duplicate rendered under the pointer.
    ///
    /// Returns `None` when idle or when the dragged element no longer
    /// exists on `board`.
    #[must_use]
    pub fn overlay(&self, board: &Board) -> Option<DragOverlay> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(id) => board.column(id).map(|column| DragOverlay::Column {
                column: column.clone(),
                tasks: board.tasks_in(id).cloned().collect(),
            }),
            Self::DraggingTask(id) => board.task(id).cloned().map(DragOverlay::Task),
        }
    }
}

/// Snapshot of the dragged element for overlay rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragOverlay {
    /// A dragged column together with the tasks it owns.
    Column {
        /// The dragged column.
        column: Column,
        /// Tasks owned by the column, in render order.
        tasks: Vec<Task>,
    },
    /// A dragged task.
    Task(Task),
}
