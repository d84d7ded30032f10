//! Checkers on an 8x8 board.
//!
//! - Men move one square diagonally forward; kings move in all four
//!   diagonal directions
//! - Capturing is mandatory, and a capture chain must be played to its end
//! - A man whose move ends on the far row is crowned
//! - The side to move with no pieces or no legal moves loses

mod board;
mod game;
mod moves;

pub use board::{
    Board, Cell, Side, Square, ALL_DIRECTIONS, BOARD_SIZE, DOWN_LEFT, DOWN_RIGHT, UP_LEFT,
    UP_RIGHT,
};
pub use game::CheckersState;
pub use moves::CheckersMove;
