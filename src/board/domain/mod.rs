//! Domain model for the board state store.
//!
//! Every mutation produces a new [`Board`] value; existing columns and
//! tasks are never modified in place.

mod board;
mod column;
mod config;
mod error;
mod ids;
mod seed;
mod task;

pub use board::Board;
pub use column::Column;
pub use config::BoardConfig;
pub use error::SeedError;
pub use ids::{ColumnId, TaskId};
pub use seed::{SeedColumn, SeedData, SeedId, SeedTask};
pub use task::Task;
