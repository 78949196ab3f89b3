//! Kanban board core: columns, task cards and drag-and-drop reordering.
//!
//! This crate holds the in-process state of a Kanban board and the
//! reorder/reparent engine that keeps the column and task sequences
//! consistent while a host UI drags items across columns. Rendering and
//! text editing stay in the host, which drives the core through
//! [`board::services::BoardService`] and subscribes to change
//! notifications.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and drag-session values with no infrastructure
//!   dependencies
//! - **Ports**: Trait interfaces for identifier generation and change
//!   notification
//! - **Adapters**: Concrete identifier generators and seed-file loading
//!
//! # Modules
//!
//! - [`board`]: Columns, tasks, seeding and the board service
//! - [`drag`]: Drag session tracking and the reorder/reparent engine

pub mod board;
pub mod drag;
