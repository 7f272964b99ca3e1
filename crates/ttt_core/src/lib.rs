// Core tic-tac-toe game logic modules
pub mod board;
pub mod error;
pub mod mark;
pub mod moves;
pub mod state;

// Re-export main types for convenience
pub use board::Board;
pub use error::MoveError;
pub use mark::Mark;
pub use moves::Move;
pub use state::GameState;
