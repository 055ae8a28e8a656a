//! Core Tic-Tac-Toe rules: the 3×3 board, player types, and the board model
//! that validates moves and detects wins and draws.

mod board;
mod player;
mod state;

pub use board::{Axis, Board, Cell, Position, WinLine, SIZE};
pub use player::Player;
pub use state::{BoardModel, GameStatus, MoveError};
