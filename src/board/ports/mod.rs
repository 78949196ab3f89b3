//! Port contracts for the board service.
//!
//! Ports define the collaborators the service depends on without tying it
//! to a particular identifier scheme or presentation framework.

pub mod id_generator;
pub mod observer;

pub use id_generator::IdGenerator;
pub use observer::{BoardObserver, SubscriptionId};

#[cfg(test)]
pub use id_generator::MockIdGenerator;
#[cfg(test)]
pub use observer::MockBoardObserver;
