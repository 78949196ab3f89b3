//! Draggable elements and drop targets.

use crate::board::domain::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A column or task taking part in a drag, either as the dragged element or
/// as the element under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    /// A board column.
    Column(ColumnId),
    /// A task card.
    Task(TaskId),
}

impl DragItem {
    /// Returns the raw identifier text.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(id) => id.as_str(),
            Self::Task(id) => id.as_str(),
        }
    }

    /// Returns `true` when both items carry the same identifier text.
    ///
    /// Columns and tasks share one identifier namespace on the drop surface,
    /// so the kind is not compared.
    #[must_use]
    pub fn same_id(&self, other: &Self) -> bool {
        self.id_str() == other.id_str()
    }
}

impl From<ColumnId> for DragItem {
    fn from(value: ColumnId) -> Self {
        Self::Column(value)
    }
}

impl From<TaskId> for DragItem {
    fn from(value: TaskId) -> Self {
        Self::Task(value)
    }
}
