//! Concrete games.
//!
//! Each game implements [`GameState`](crate::rules::GameState) and can be
//! searched and played by the generic engine.

pub mod checkers;
pub mod nim;

pub use checkers::{CheckersMove, CheckersState};
pub use nim::{HeapMove, NimState};
