//! Drag-and-drop session tracking and board reordering.
//!
//! - Session, item and event types in [`domain`]
//! - The reorder/reparent state machine in [`engine`]

pub mod domain;
pub mod engine;
