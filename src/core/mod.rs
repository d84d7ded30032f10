//! Core engine types: players, RNG, errors.
//!
//! This module contains the fundamental building blocks that are game-agnostic.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{MoveError, MoveResult, ValidationError};
pub use player::Player;
pub use rng::GameRng;
