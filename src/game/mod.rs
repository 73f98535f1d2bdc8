//! Core Connect Four game logic: board, player types, the pure game state
//! machine and the sink-bound engine that reports every move.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use engine::Connect4Engine;
pub use player::Player;
pub use state::{GameResult, GameState};
