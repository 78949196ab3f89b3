//! Identifier generation port.

use crate::board::domain::{ColumnId, TaskId};

/// Source of fresh identifiers for new columns and tasks.
///
/// The board trusts the generator: uniqueness is not verified when an
/// identifier is used.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// Returns an identifier for a new column.
    fn next_column_id(&self) -> ColumnId;

    /// Returns an identifier for a new task.
    fn next_task_id(&self) -> TaskId;
}
