//! Static seed dataset loaded once at startup.
//!
//! The document shape is `{ "status": [{id, title}], "users": [{id,
//! statusId, content}] }`. Columns are listed under `status` and tasks under
//! `users`; unknown keys are ignored.

use super::{ColumnId, SeedError, TaskId};
use serde::Deserialize;
use std::fmt;

/// Seed identifier, written either as a JSON string or a JSON number.
///
/// Numbers normalise to their `serde_json` text form, so `2`, `1.5`, `-3`
/// and integers beyond `i64::MAX` are all accepted as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SeedId {
    /// Identifier written as a string.
    Text(String),
    /// Identifier written as a number of any JSON kind.
    Number(serde_json::Number),
}

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&SeedId> for ColumnId {
    fn from(value: &SeedId) -> Self {
        Self::new(value.to_string())
    }
}

impl From<&SeedId> for TaskId {
    fn from(value: &SeedId) -> Self {
        Self::new(value.to_string())
    }
}

/// Seed record for one column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedColumn {
    /// Column identifier.
    pub id: SeedId,
    /// Display title.
    pub title: String,
}

/// Seed record for one task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedTask {
    /// Task identifier.
    pub id: SeedId,
    /// Identifier of the owning column.
    #[serde(rename = "statusId")]
    pub status_id: SeedId,
    /// Card content.
    pub content: String,
}

/// Complete seed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    /// Columns in display order.
    #[serde(default)]
    pub status: Vec<SeedColumn>,
    /// Tasks in display order.
    #[serde(default)]
    pub users: Vec<SeedTask>,
}

impl SeedData {
    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when the text is not a valid seed
    /// document.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(text)?)
    }
}
