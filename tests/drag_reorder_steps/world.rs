//! Shared world state for drag reordering BDD scenarios.

use crate::test_helpers::TestBoardService;
use kanban_board::board::{
    adapters::ids::SequentialIdGenerator, domain::Board, services::BoardService,
};
use rstest::fixture;

/// Scenario world for drag reordering behaviour tests.
pub struct DragWorld {
    /// The board service under test.
    pub service: TestBoardService,
    /// Board captured when the scenario was seeded.
    pub initial: Option<Board>,
}

impl DragWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: BoardService::new(Board::new(), SequentialIdGenerator::new()),
            initial: None,
        }
    }
}

impl Default for DragWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DragWorld {
    DragWorld::default()
}

/// Splits a comma-separated identifier list from a step.
#[must_use]
pub fn id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}
