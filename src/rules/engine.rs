//! Game state contract.
//!
//! Games implement `GameState` to define their rules:
//! - What moves are legal
//! - How a move produces the next state
//! - Win/loss conditions

use std::fmt::{Debug, Display};

use crate::core::{MoveError, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Game state trait.
///
/// States are immutable values: every transition returns a new state and
/// leaves the receiver untouched, so the search can explore many futures
/// from a shared ancestor.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty vec iff the side to move cannot act
/// - `apply_move`: Only called with moves drawn from `legal_moves`
/// - `result`: Return None while the game continues
pub trait GameState: Clone {
    /// The move type of this game.
    type Move: Clone + PartialEq + Debug + Display;

    /// Enumerate all legal moves for the side to move.
    ///
    /// The order is fixed per game; it only affects tie-breaking.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move known to be legal and return the next state.
    fn apply_move(&self, mv: &Self::Move) -> Self;

    /// Player to move now.
    fn current_player(&self) -> Player;

    /// Player waiting for their turn.
    fn other_player(&self) -> Player;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn result(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_finished(&self) -> bool {
        self.result().is_some()
    }

    /// The winner of a finished game. `None` while running or on a draw.
    fn winner(&self) -> Option<Player> {
        self.result().and_then(|r| r.winner())
    }

    /// Apply a move after checking it against the legal set.
    ///
    /// Games override this to report malformed input more precisely.
    fn make_move(&self, mv: &Self::Move) -> Result<Self, MoveError> {
        if !self.legal_moves().contains(mv) {
            return Err(MoveError::Illegal {
                mv: mv.to_string(),
                player: self.current_player(),
            });
        }
        Ok(self.apply_move(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counting game: players alternately add 1 or 2, reaching `target` wins.
    #[derive(Clone, Debug)]
    struct CountTo {
        total: u32,
        target: u32,
        current: Player,
        other: Player,
    }

    impl GameState for CountTo {
        type Move = u32;

        fn legal_moves(&self) -> Vec<u32> {
            if self.total >= self.target {
                return vec![];
            }
            (1..=2).filter(|step| self.total + step <= self.target).collect()
        }

        fn apply_move(&self, mv: &u32) -> Self {
            Self {
                total: self.total + mv,
                target: self.target,
                current: self.other,
                other: self.current,
            }
        }

        fn current_player(&self) -> Player {
            self.current
        }

        fn other_player(&self) -> Player {
            self.other
        }

        fn result(&self) -> Option<GameResult> {
            (self.total >= self.target).then_some(GameResult::Winner(self.other))
        }
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::new('2'));
        assert!(!result.is_winner(Player::new('1')));
        assert!(result.is_winner(Player::new('2')));
        assert_eq!(result.winner(), Some(Player::new('2')));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::new('1')));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_default_make_move_rejects_illegal() {
        let state = CountTo {
            total: 0,
            target: 3,
            current: Player::new('1'),
            other: Player::new('2'),
        };

        let err = state.make_move(&5).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                mv: "5".to_string(),
                player: Player::new('1'),
            }
        );

        let next = state.make_move(&2).unwrap();
        assert_eq!(next.current_player(), Player::new('2'));
        assert_eq!(state.total, 0);
    }

    #[test]
    fn test_default_winner() {
        let state = CountTo {
            total: 2,
            target: 3,
            current: Player::new('1'),
            other: Player::new('2'),
        };
        assert!(!state.is_finished());
        assert_eq!(state.winner(), None);

        let done = state.apply_move(&1);
        assert!(done.is_finished());
        assert_eq!(done.winner(), Some(Player::new('1')));
    }
}
