//! Change notification port used by the presentation layer.

use crate::board::domain::Board;
use crate::drag::domain::DragSession;
use std::fmt;

/// Receives notifications when the board service state changes.
///
/// Notifications are delivered synchronously, in subscription order, after
/// the new state has been stored.
#[cfg_attr(test, mockall::automock)]
pub trait BoardObserver {
    /// Called after the board changed.
    fn board_changed(&self, board: &Board);

    /// Called after the drag session changed.
    fn drag_session_changed(&self, session: &DragSession);
}

/// Handle identifying one observer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a subscription handle from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
