//! Identifier generator adapters.

use crate::board::{
    domain::{ColumnId, TaskId},
    ports::IdGenerator,
};
use std::cell::Cell;
use uuid::Uuid;

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_column_id(&self) -> ColumnId {
        ColumnId::from_uuid(Uuid::new_v4())
    }

    fn next_task_id(&self) -> TaskId {
        TaskId::from_uuid(Uuid::new_v4())
    }
}

/// Generates predictable identifiers such as `column-1` and `task-1`.
///
/// Column and task counters are independent. Useful for deterministic
/// tests and fixtures.
///
/// # Examples
///
/// ```
/// use kanban_board::board::adapters::ids::SequentialIdGenerator;
/// use kanban_board::board::ports::IdGenerator;
///
/// let ids = SequentialIdGenerator::new();
/// assert_eq!(ids.next_column_id().as_str(), "column-1");
/// assert_eq!(ids.next_task_id().as_str(), "task-1");
/// assert_eq!(ids.next_column_id().as_str(), "column-2");
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    columns: Cell<u64>,
    tasks: Cell<u64>,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifiers end in `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn bump(counter: &Cell<u64>) -> u64 {
    let next = counter.get() + 1;
    counter.set(next);
    next
}

impl IdGenerator for SequentialIdGenerator {
    fn next_column_id(&self) -> ColumnId {
        ColumnId::new(format!("column-{}", bump(&self.columns)))
    }

    fn next_task_id(&self) -> TaskId {
        TaskId::new(format!("task-{}", bump(&self.tasks)))
    }
}
