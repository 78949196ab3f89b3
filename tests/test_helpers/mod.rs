//! Shared fixtures and tracing setup for integration tests.

use kanban_board::board::{
    adapters::ids::SequentialIdGenerator,
    domain::{Board, SeedData},
    services::BoardService,
};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Seed document with three columns and five tasks.
///
/// Task sequence order is `d, e, a, b, c`; column `x` owns `a, b, c` and
/// column `y` owns `d, e`.
pub const BOARD_SEED: &str = r#"{
    "status": [
        { "id": "x", "title": "Todo" },
        { "id": "y", "title": "Doing" },
        { "id": "z", "title": "Done" }
    ],
    "users": [
        { "id": "d", "statusId": "y", "content": "Deploy" },
        { "id": "e", "statusId": "y", "content": "Escalate" },
        { "id": "a", "statusId": "x", "content": "Audit" },
        { "id": "b", "statusId": "x", "content": "Build" },
        { "id": "c", "statusId": "x", "content": "Clean up" }
    ]
}"#;

/// Service type used across integration tests.
pub type TestBoardService = BoardService<SequentialIdGenerator>;

/// Installs a test-writer tracing subscriber once per test binary.
///
/// The filter honours `RUST_LOG` and defaults to `kanban_board=debug`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kanban_board=debug"));
        // Another harness may already own the global subscriber.
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Builds the board described by [`BOARD_SEED`].
///
/// # Errors
///
/// Returns an error if the seed fails to parse or validate.
pub fn seeded_board() -> Result<Board, eyre::Report> {
    let seed = SeedData::from_json(BOARD_SEED)?;
    Ok(Board::from_seed(&seed)?)
}

/// Returns the identifiers of the tasks owned by `column`, in render order.
#[must_use]
pub fn column_task_ids(board: &Board, column: &str) -> Vec<String> {
    let column_id = column.into();
    board
        .tasks_in(&column_id)
        .map(|task| task.id().to_string())
        .collect()
}

/// Returns the column identifiers in display order.
#[must_use]
pub fn column_order(board: &Board) -> Vec<String> {
    board
        .columns()
        .iter()
        .map(|column| column.id().to_string())
        .collect()
}
