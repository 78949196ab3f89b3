//! Application services for driving a board from a UI session.

mod session;

pub use session::BoardService;
