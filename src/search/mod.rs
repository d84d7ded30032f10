//! Adversarial search for rust-duel.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over any
//! [`GameState`](crate::rules::GameState):
//!
//! - **Injected heuristics**: leaves are scored by an [`Evaluator`]
//! - **Infinite win scores**: forced wins and losses dominate any heuristic
//! - **Seeded tie-break**: equally good moves are chosen by a [`GameRng`](crate::core::GameRng)
//!
//! ## Usage
//!
//! ```rust
//! use rust_duel::games::nim::NimState;
//! use rust_duel::search::{MinimaxSearch, NimEvaluator, SearchConfig};
//!
//! let state = NimState::with_heaps(&[3, 4, 5]);
//! let mut search = MinimaxSearch::new(NimEvaluator, SearchConfig::default().with_seed(7));
//!
//! if let Some(mv) = search.find_best_move(&state, 4) {
//!     println!("Best move: {}", mv);
//! }
//! println!("Visited {} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod evaluator;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use evaluator::{
    terminal_score, CheckersEvaluator, Evaluator, NimEvaluator, Score, KING_VALUE, MAN_VALUE,
    NIM_WINNING_SCORE, WIN_SCORE,
};
pub use minimax::MinimaxSearch;
pub use stats::SearchStats;
