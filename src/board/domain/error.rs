//! Error types for loading seed data.

use super::{ColumnId, TaskId};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned while reading or validating a seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON for the expected shape.
    #[error("malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two seed columns share an identifier.
    #[error("duplicate column identifier in seed: {0}")]
    DuplicateColumn(ColumnId),

    /// Two seed tasks share an identifier.
    #[error("duplicate task identifier in seed: {0}")]
    DuplicateTask(TaskId),

    /// A seed task names a column that does not exist.
    #[error("task {task} references unknown column {column}")]
    UnknownColumn {
        /// Offending task.
        task: TaskId,
        /// Column the task claims to belong to.
        column: ColumnId,
    },
}
