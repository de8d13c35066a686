// Re-export the GameState contract and its shakmaty implementation
mod state;
pub use state::BoardGrid;
pub use state::GameState;

mod chess_game;
pub use chess_game::ChessGame;

pub mod utils;
