//! Pointer drag events delivered by the host UI.

use super::DragItem;
use serde::{Deserialize, Serialize};

/// One event of a drag gesture.
///
/// `over` is `None` when the pointer is outside every drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragEvent {
    /// The pointer picked up `active`.
    Start {
        /// Element being dragged.
        active: DragItem,
    },
    /// The dragged element hovers `over`. Fires continuously.
    Over {
        /// Element being dragged.
        active: DragItem,
        /// Element under the pointer.
        over: Option<DragItem>,
    },
    /// The pointer released the dragged element above `over`.
    End {
        /// Element being dragged.
        active: DragItem,
        /// Element under the pointer.
        over: Option<DragItem>,
    },
}

impl DragEvent {
    /// Returns the dragged element.
    #[must_use]
    pub const fn active(&self) -> &DragItem {
        match self {
            Self::Start { active } | Self::Over { active, .. } | Self::End { active, .. } => active,
        }
    }
}
