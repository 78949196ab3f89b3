//! Board column value.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named lane holding an ordered subset of the board's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns a copy of this column carrying a new title.
    #[must_use]
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into(),
        }
    }
}
