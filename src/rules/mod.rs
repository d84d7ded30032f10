//! Game state contract for game implementations.
//!
//! Games implement `GameState` to define:
//! - Legal moves for each state
//! - How a move produces the next state
//! - Win/loss conditions
//!
//! The search calls into `GameState` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, GameState};
