//! # rust-duel
//!
//! A two-player, perfect-information, zero-sum game engine with
//! depth-limited minimax search.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: The search only sees the `GameState`
//!    contract. Games supply moves, transitions and results; evaluators
//!    supply leaf scores.
//!
//! 2. **Immutable States**: Every transition returns a new state, so any
//!    position can be explored many times from a shared ancestor.
//!
//! 3. **Deterministic**: All randomness (tie-breaking between equally good
//!    moves) flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors
//! - `rules`: `GameState` trait for game implementations
//! - `games`: Nim and checkers
//! - `search`: Evaluators and minimax with alpha-beta pruning
//! - `arena`: Bot-vs-bot matches, series and depth comparisons

pub mod core;
pub mod rules;
pub mod games;
pub mod search;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{GameRng, MoveError, MoveResult, Player, ValidationError};

pub use crate::rules::{GameResult, GameState};

pub use crate::games::{CheckersMove, CheckersState, HeapMove, NimState};

pub use crate::search::{
    CheckersEvaluator, Evaluator, MinimaxSearch, NimEvaluator, Score, SearchConfig, SearchStats,
    WIN_SCORE,
};

pub use crate::arena::{
    compare_depths, play_bot_vs_bot, play_series, DepthMatchup, MatchConfig, MatchOutcome,
    MatchTally,
};
