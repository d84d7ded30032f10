//! Error types for move construction and application.
//!
//! Malformed input fails fast with a [`ValidationError`] when a move or a
//! custom position is built. A well-formed move that is not legal in the
//! current position is rejected by `make_move` with [`MoveError::Illegal`].

use thiserror::Error;

use super::player::Player;

/// Malformed move or position input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a move must remove at least one item")]
    ZeroCount,

    #[error("heap {heap} does not exist (there are {heaps} heaps)")]
    HeapOutOfRange { heap: usize, heaps: usize },

    #[error("cannot remove {count} items from heap {heap} holding {size}")]
    CountExceedsHeap { heap: usize, count: u32, size: u32 },

    #[error("a checkers move needs at least 2 squares, got {len}")]
    SequenceTooShort { len: usize },

    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    #[error("square ({row}, {col}) is a light square")]
    LightSquare { row: u8, col: u8 },

    #[error("({}, {}) -> ({}, {}) is not a diagonal step or jump", from.0, from.1, to.0, to.1)]
    NotDiagonal { from: (u8, u8), to: (u8, u8) },

    #[error("a capture chain cannot contain a simple step")]
    MixedSteps,

    #[error("cannot parse move notation: {0}")]
    BadNotation(String),

    #[error("board row {row}: {reason}")]
    BadBoardRow { row: usize, reason: String },
}

/// Errors returned by `make_move`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move {mv} for {player}")]
    Illegal { mv: String, player: Player },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Result type alias for move operations.
pub type MoveResult<T> = Result<T, MoveError>;
