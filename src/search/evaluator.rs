//! Heuristic leaf evaluation.
//!
//! Evaluators are trait-based so each game plugs in its own heuristic:
//! - `NimEvaluator`: nim-sum parity
//! - `CheckersEvaluator`: material balance
//!
//! Scores are always reported from the maximizing player's point of view.
//! Decided games score `±WIN_SCORE`, which dominates every heuristic value.

use crate::core::Player;
use crate::games::checkers::{Cell, CheckersState};
use crate::games::nim::NimState;
use crate::rules::{GameResult, GameState};

/// Search score. Higher is better for the maximizing player.
pub type Score = f64;

/// Score of a forced win.
pub const WIN_SCORE: Score = f64::INFINITY;

/// Heuristic value of a won Nim position that the horizon cut short.
pub const NIM_WINNING_SCORE: Score = 100.0;

/// Material value of a man.
pub const MAN_VALUE: Score = 2.0;

/// Material value of a king.
pub const KING_VALUE: Score = 3.0;

/// Leaf evaluation strategy for a game.
pub trait Evaluator<S: GameState> {
    /// Score `state` for `maximizing`.
    fn evaluate(&self, state: &S, maximizing: Player) -> Score;
}

/// Score of a finished game, or `None` while it runs.
pub fn terminal_score<S: GameState>(state: &S, maximizing: Player) -> Option<Score> {
    state.result().map(|result| match result {
        GameResult::Winner(p) if p == maximizing => WIN_SCORE,
        GameResult::Winner(_) => -WIN_SCORE,
        GameResult::Draw => 0.0,
    })
}

// =============================================================================
// Nim
// =============================================================================

/// Nim-sum heuristic.
///
/// A nonzero nim-sum is a win for the player about to move, so the cutoff
/// score is exact under optimal play. The search does not shortcut on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NimEvaluator;

impl Evaluator<NimState> for NimEvaluator {
    fn evaluate(&self, state: &NimState, maximizing: Player) -> Score {
        if let Some(score) = terminal_score(state, maximizing) {
            return score;
        }

        let for_mover = if state.nim_sum() != 0 {
            NIM_WINNING_SCORE
        } else {
            -NIM_WINNING_SCORE
        };

        if state.current_player() == maximizing {
            for_mover
        } else {
            -for_mover
        }
    }
}

// =============================================================================
// Checkers
// =============================================================================

/// Material balance: men count 2, kings 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckersEvaluator;

impl CheckersEvaluator {
    fn piece_value(cell: Cell) -> Score {
        match cell {
            Cell::Empty => 0.0,
            c if c.is_king() => KING_VALUE,
            _ => MAN_VALUE,
        }
    }
}

impl Evaluator<CheckersState> for CheckersEvaluator {
    fn evaluate(&self, state: &CheckersState, maximizing: Player) -> Score {
        if let Some(score) = terminal_score(state, maximizing) {
            return score;
        }

        // Not a player of this game: no side to favour.
        let Some(side) = state.side_of(maximizing) else {
            return 0.0;
        };

        let board = state.board();
        let own: Score = board.pieces(side).map(|(_, c)| Self::piece_value(c)).sum();
        let theirs: Score = board
            .pieces(side.opponent())
            .map(|(_, c)| Self::piece_value(c))
            .sum();
        own - theirs
    }
}
