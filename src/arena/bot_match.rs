//! Single bot-vs-bot game.
//!
//! Two minimax bots, possibly searching to different depths, play one game
//! from a given start position. The first bot plays whoever is to move in
//! the start position.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameRng, Player};
use crate::rules::{GameResult, GameState};
use crate::search::{Evaluator, MinimaxSearch, SearchConfig};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seed from which both bots' tie-break seeds are forked.
    pub seed: u64,

    /// Maximum plies before the game is abandoned (None = play to the end).
    /// Games without a draw rule can otherwise shuffle forever.
    pub max_plies: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_plies: None,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the game length.
    pub fn with_max_plies(mut self, plies: usize) -> Self {
        self.max_plies = Some(plies);
        self
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Single winner.
    Winner(Player),
    /// Game ended without a winner.
    Draw,
    /// Ply cap reached before the game ended.
    Unfinished,
}

impl MatchOutcome {
    /// The winner's label, `"Draw"` or `"Unfinished"`.
    pub fn label(&self) -> String {
        match self {
            MatchOutcome::Winner(p) => p.label().to_string(),
            MatchOutcome::Draw => "Draw".to_string(),
            MatchOutcome::Unfinished => "Unfinished".to_string(),
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchOutcome::Winner(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<GameResult> for MatchOutcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Winner(p) => MatchOutcome::Winner(p),
            GameResult::Draw => MatchOutcome::Draw,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Play one game between a bot searching `depth_first` plies and one
/// searching `depth_second` plies.
///
/// The first bot plays `initial_state.current_player()`. Bots alternate by
/// whoever is to move, so a player who keeps the move keeps searching with
/// its own depth.
pub fn play_bot_vs_bot<S, V>(
    depth_first: u32,
    depth_second: u32,
    initial_state: &S,
    evaluator: V,
    config: &MatchConfig,
) -> MatchOutcome
where
    S: GameState,
    V: Evaluator<S> + Clone,
{
    let mut rng = GameRng::new(config.seed);
    let first_player = initial_state.current_player();

    let mut first = MinimaxSearch::new(
        evaluator.clone(),
        SearchConfig::default().with_depth(depth_first).with_seed(rng.fork().seed()),
    );
    let mut second = MinimaxSearch::new(
        evaluator,
        SearchConfig::default().with_depth(depth_second).with_seed(rng.fork().seed()),
    );

    let mut state = initial_state.clone();
    let mut plies = 0usize;

    while !state.is_finished() {
        if config.max_plies.is_some_and(|max| plies >= max) {
            debug!(plies, "match abandoned at ply cap");
            return MatchOutcome::Unfinished;
        }

        let mover = state.current_player();
        let bot = if mover == first_player { &mut first } else { &mut second };

        let Some(mv) = bot.best_move(&state) else {
            break;
        };

        trace!(ply = plies, player = %mover, mv = %mv, "bot move");
        state = state.apply_move(&mv);
        plies += 1;
    }

    let outcome = state.result().map_or(MatchOutcome::Unfinished, MatchOutcome::from);
    debug!(outcome = %outcome, plies, depth_first, depth_second, "match finished");
    outcome
}
