//! Board behaviour configuration.

/// Configuration for default labels and edit locking.
///
/// # Examples
///
/// ```
/// use kanban_board::board::domain::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.column_title(0), "Column 1");
/// assert_eq!(config.task_content(2), "Task 3");
///
/// let unlocked = BoardConfig::unlocked();
/// assert!(!unlocked.lock_new_tasks_for_editing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix of the default title given to new columns.
    pub column_title_prefix: String,
    /// Prefix of the default content given to new tasks.
    pub task_content_prefix: String,
    /// Whether newly created tasks start in edit mode, which blocks dragging
    /// them until the edit is finished.
    pub lock_new_tasks_for_editing: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Column".to_owned(),
            task_content_prefix: "Task".to_owned(),
            lock_new_tasks_for_editing: true,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration where new tasks are draggable immediately.
    #[must_use]
    pub fn unlocked() -> Self {
        Self {
            lock_new_tasks_for_editing: false,
            ..Default::default()
        }
    }

    /// Returns the default title for a column appended after
    /// `existing_columns` columns.
    #[must_use]
    pub fn column_title(&self, existing_columns: usize) -> String {
        format!("{} {}", self.column_title_prefix, existing_columns + 1)
    }

    /// Returns the default content for a task appended after
    /// `existing_tasks` tasks.
    #[must_use]
    pub fn task_content(&self, existing_tasks: usize) -> String {
        format!("{} {}", self.task_content_prefix, existing_tasks + 1)
    }
}
