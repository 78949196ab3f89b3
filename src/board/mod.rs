//! Board state management.
//!
//! A board is an ordered sequence of columns and an ordered sequence of
//! tasks, each task tagged with its owning column. Sequence position is the
//! only ordering information; there is no rank field. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The stateful board service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
