//! Given steps for drag reordering BDD scenarios.

use super::world::DragWorld;
use crate::test_helpers::{init_tracing, seeded_board};
use kanban_board::board::{adapters::ids::SequentialIdGenerator, services::BoardService};
use rstest_bdd_macros::given;

#[given("the seeded board")]
fn the_seeded_board(world: &mut DragWorld) -> Result<(), eyre::Report> {
    init_tracing();
    let board = seeded_board()?;
    world.initial = Some(board.clone());
    world.service = BoardService::new(board, SequentialIdGenerator::new());
    Ok(())
}
