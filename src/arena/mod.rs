//! Bot-vs-bot play for comparing search settings.
//!
//! ## Overview
//!
//! - **play_bot_vs_bot**: One game between two minimax bots
//! - **play_series**: Repeated games with forked seeds, tallied
//! - **compare_depths**: A series for every ordered pair of depths
//!
//! ## Usage
//!
//! ```rust
//! use rust_duel::arena::{compare_depths, play_bot_vs_bot, MatchConfig};
//! use rust_duel::games::nim::NimState;
//! use rust_duel::search::NimEvaluator;
//!
//! let state = NimState::with_heaps(&[1, 2, 3]);
//! let config = MatchConfig::default().with_seed(7);
//!
//! let outcome = play_bot_vs_bot(2, 3, &state, NimEvaluator, &config);
//! println!("Winner: {}", outcome.label());
//!
//! for matchup in compare_depths(&[1, 2], 3, &state, NimEvaluator, &config) {
//!     println!(
//!         "{} vs {}: {} wins for the first bot",
//!         matchup.depth_first, matchup.depth_second, matchup.tally.first_wins
//!     );
//! }
//! ```

pub mod bot_match;
pub mod series;

// Re-export main types
pub use bot_match::{play_bot_vs_bot, MatchConfig, MatchOutcome};
pub use series::{compare_depths, play_series, DepthMatchup, MatchTally};
