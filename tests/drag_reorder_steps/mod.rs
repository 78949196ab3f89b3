//! Step definitions for drag-and-drop reordering scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
