//! Task card value.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A content-bearing card owned by exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    column_id: ColumnId,
    content: String,
}

impl Task {
    /// Creates a task owned by `column_id`.
    #[must_use]
    pub fn new(id: TaskId, column_id: ColumnId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Returns the card content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` when the task belongs to `column_id`.
    #[must_use]
    pub fn is_in(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id
    }

    /// Returns a copy of this task carrying new content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            column_id: self.column_id.clone(),
            content: content.into(),
        }
    }

    /// Returns a copy of this task owned by another column.
    #[must_use]
    pub fn reassigned_to(&self, column_id: ColumnId) -> Self {
        Self {
            id: self.id.clone(),
            column_id,
            content: self.content.clone(),
        }
    }
}
