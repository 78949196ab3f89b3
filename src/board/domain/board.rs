//! Board aggregate: ordered columns and ordered tasks.

use super::{BoardConfig, Column, ColumnId, SeedData, SeedError, Task, TaskId};
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Immutable snapshot of a Kanban board.
///
/// Column order is display order. Task order is the global sequence; the
/// tasks shown in a column are that sequence filtered by owner, so relative
/// order within a column is preserved. All mutators return a new board and
/// treat absent identifiers as no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from already-ordered sequences.
    ///
    /// The caller is responsible for identifier uniqueness and for every task
    /// referencing one of `columns`.
    #[must_use]
    pub const fn from_parts(columns: Vec<Column>, tasks: Vec<Task>) -> Self {
        Self { columns, tasks }
    }

    /// Builds a board from a seed dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateColumn`] or [`SeedError::DuplicateTask`]
    /// when identifiers repeat, and [`SeedError::UnknownColumn`] when a task
    /// names a column absent from the seed.
    pub fn from_seed(seed: &SeedData) -> Result<Self, SeedError> {
        let mut column_ids = HashSet::with_capacity(seed.status.len());
        let mut columns = Vec::with_capacity(seed.status.len());
        for record in &seed.status {
            let id = ColumnId::from(&record.id);
            if !column_ids.insert(id.clone()) {
                warn!(column_id = %id, "seed repeats a column identifier");
                return Err(SeedError::DuplicateColumn(id));
            }
            columns.push(Column::new(id, record.title.clone()));
        }

        let mut task_ids = HashSet::with_capacity(seed.users.len());
        let mut tasks = Vec::with_capacity(seed.users.len());
        for record in &seed.users {
            let id = TaskId::from(&record.id);
            let column = ColumnId::from(&record.status_id);
            if !column_ids.contains(&column) {
                warn!(task_id = %id, column_id = %column, "seed task references unknown column");
                return Err(SeedError::UnknownColumn { task: id, column });
            }
            if !task_ids.insert(id.clone()) {
                warn!(task_id = %id, "seed repeats a task identifier");
                return Err(SeedError::DuplicateTask(id));
            }
            tasks.push(Task::new(id, column, record.content.clone()));
        }

        Ok(Self { columns, tasks })
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns every task in sequence order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the position of a column in the column sequence.
    #[must_use]
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == id)
    }

    /// Returns the position of a task in the task sequence.
    #[must_use]
    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns the tasks owned by `column_id`, in render order.
    pub fn tasks_in<'a>(&'a self, column_id: &'a ColumnId) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |task| task.is_in(column_id))
    }

    /// Appends a column with a default title derived from the column count.
    #[must_use]
    pub fn create_column(&self, id: ColumnId, config: &BoardConfig) -> Self {
        let title = config.column_title(self.columns.len());
        let mut columns = self.columns.clone();
        columns.push(Column::new(id, title));
        self.with_columns(columns)
    }

    /// Removes a column and every task it owns.
    #[must_use]
    pub fn delete_column(&self, id: &ColumnId) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|column| column.id() != id)
                .cloned()
                .collect(),
            tasks: self
                .tasks
                .iter()
                .filter(|task| !task.is_in(id))
                .cloned()
                .collect(),
        }
    }

    /// Replaces the title of a column, keeping its position.
    #[must_use]
    pub fn update_column(&self, id: &ColumnId, title: &str) -> Self {
        self.with_columns(
            self.columns
                .iter()
                .map(|column| {
                    if column.id() == id {
                        column.retitled(title)
                    } else {
                        column.clone()
                    }
                })
                .collect(),
        )
    }

    /// Appends a task owned by `column_id` with default content derived from
    /// the task count.
    ///
    /// Creating a task for an absent column is a no-op, so every task keeps
    /// referencing an existing column.
    #[must_use]
    pub fn create_task(&self, id: TaskId, column_id: &ColumnId, config: &BoardConfig) -> Self {
        if self.column(column_id).is_none() {
            return self.clone();
        }
        let content = config.task_content(self.tasks.len());
        let mut tasks = self.tasks.clone();
        tasks.push(Task::new(id, column_id.clone(), content));
        self.with_tasks(tasks)
    }

    /// Removes a task.
    #[must_use]
    pub fn delete_task(&self, id: &TaskId) -> Self {
        self.with_tasks(
            self.tasks
                .iter()
                .filter(|task| task.id() != id)
                .cloned()
                .collect(),
        )
    }

    /// Replaces the content of a task, keeping its position and owner.
    #[must_use]
    pub fn update_task(&self, id: &TaskId, content: &str) -> Self {
        self.with_tasks(
            self.tasks
                .iter()
                .map(|task| {
                    if task.id() == id {
                        task.with_content(content)
                    } else {
                        task.clone()
                    }
                })
                .collect(),
        )
    }

    /// Returns a board with a new column sequence and a copy of this board's
    /// tasks.
    pub(crate) fn with_columns(&self, columns: Vec<Column>) -> Self {
        Self {
            columns,
            tasks: self.tasks.clone(),
        }
    }

    /// Returns a board with a new task sequence and a copy of this board's
    /// columns.
    pub(crate) fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            columns: self.columns.clone(),
            tasks,
        }
    }
}
