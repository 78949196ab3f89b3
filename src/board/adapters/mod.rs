//! Adapter implementations for board ports and seed loading.

pub mod ids;
pub mod seed_file;
