//! Multi-game series and depth comparisons.
//!
//! A series replays the same start position with freshly forked seeds, so
//! games differ only in how ties between equally good moves are broken.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::GameRng;
use crate::rules::GameState;
use crate::search::Evaluator;

use super::bot_match::{play_bot_vs_bot, MatchConfig, MatchOutcome};

/// Results of a series, from the first bot's point of view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    /// Games won by the first bot.
    pub first_wins: u32,

    /// Games won by the second bot.
    pub second_wins: u32,

    /// Drawn games.
    pub draws: u32,

    /// Games stopped at the ply cap.
    pub unfinished: u32,
}

impl MatchTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws + self.unfinished
    }

    /// Fraction of games won by the first bot.
    #[must_use]
    pub fn first_win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => self.first_wins as f64 / n as f64,
        }
    }

    fn record(&mut self, outcome: MatchOutcome, first_is_winner: bool) {
        match outcome {
            MatchOutcome::Winner(_) if first_is_winner => self.first_wins += 1,
            MatchOutcome::Winner(_) => self.second_wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Unfinished => self.unfinished += 1,
        }
    }
}

/// Tally of one ordered pair of depths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthMatchup {
    /// Depth of the bot moving first.
    pub depth_first: u32,

    /// Depth of the bot moving second.
    pub depth_second: u32,

    /// Results of the series.
    pub tally: MatchTally,
}

/// Play `games` games between two depths and tally the results.
///
/// Each game gets its own seed forked from `config.seed`.
pub fn play_series<S, V>(
    depth_first: u32,
    depth_second: u32,
    initial_state: &S,
    evaluator: V,
    games: usize,
    config: &MatchConfig,
) -> MatchTally
where
    S: GameState,
    V: Evaluator<S> + Clone,
{
    let first_player = initial_state.current_player();
    let mut rng = GameRng::new(config.seed);
    let mut tally = MatchTally::new();

    for _ in 0..games {
        let game_config = config.clone().with_seed(rng.fork().seed());
        let outcome = play_bot_vs_bot(
            depth_first,
            depth_second,
            initial_state,
            evaluator.clone(),
            &game_config,
        );
        tally.record(outcome, outcome.winner() == Some(first_player));
    }

    info!(
        depth_first,
        depth_second,
        games,
        first_wins = tally.first_wins,
        second_wins = tally.second_wins,
        draws = tally.draws,
        unfinished = tally.unfinished,
        "series finished"
    );

    tally
}

/// Play a series for every ordered pair of `depths`, same depths included.
///
/// Results come back in row-major order: first depth outer, second inner.
pub fn compare_depths<S, V>(
    depths: &[u32],
    games_per_pair: usize,
    initial_state: &S,
    evaluator: V,
    config: &MatchConfig,
) -> Vec<DepthMatchup>
where
    S: GameState,
    V: Evaluator<S> + Clone,
{
    let mut matchups = Vec::with_capacity(depths.len() * depths.len());

    for &depth_first in depths {
        for &depth_second in depths {
            let tally = play_series(
                depth_first,
                depth_second,
                initial_state,
                evaluator.clone(),
                games_per_pair,
                config,
            );
            matchups.push(DepthMatchup {
                depth_first,
                depth_second,
                tally,
            });
        }
    }

    matchups
}
