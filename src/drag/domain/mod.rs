//! Domain model for drag sessions.

mod event;
mod item;
mod session;

pub use event::DragEvent;
pub use item::DragItem;
pub use session::{DragOverlay, DragSession};
