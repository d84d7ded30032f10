//! Nim implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveError, Player, ValidationError};
use crate::rules::{GameResult, GameState};

/// Remove `count` items from heap `heap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeapMove")]
pub struct HeapMove {
    heap: usize,
    count: u32,
}

/// Wire form of [`HeapMove`], checked by [`HeapMove::new`] on the way in.
#[derive(Deserialize)]
struct RawHeapMove {
    heap: usize,
    count: u32,
}

impl TryFrom<RawHeapMove> for HeapMove {
    type Error = ValidationError;

    fn try_from(raw: RawHeapMove) -> Result<Self, Self::Error> {
        HeapMove::new(raw.heap, raw.count)
    }
}

impl HeapMove {
    /// Create a move. Removing nothing is rejected.
    pub fn new(heap: usize, count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::ZeroCount);
        }
        Ok(Self { heap, count })
    }

    /// Index of the heap to take from.
    #[must_use]
    pub fn heap(&self) -> usize {
        self.heap
    }

    /// Number of items removed.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl std::fmt::Display for HeapMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from heap {}", self.count, self.heap)
    }
}

/// Nim position: heap sizes plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimState {
    heaps: SmallVec<[u32; 8]>,
    current: Player,
    other: Player,
}

impl NimState {
    /// Label of the player moving first in a default game.
    pub const FIRST_PLAYER_LABEL: char = '1';
    /// Label of the player moving second in a default game.
    pub const SECOND_PLAYER_LABEL: char = '2';

    /// Create a position with `first` to move.
    pub fn new(heaps: &[u32], first: Player, second: Player) -> Self {
        Self {
            heaps: SmallVec::from_slice(heaps),
            current: first,
            other: second,
        }
    }

    /// Create a position with the default players `'1'` (to move) and `'2'`.
    pub fn with_heaps(heaps: &[u32]) -> Self {
        Self::new(
            heaps,
            Player::new(Self::FIRST_PLAYER_LABEL),
            Player::new(Self::SECOND_PLAYER_LABEL),
        )
    }

    /// Current heap sizes.
    #[must_use]
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// XOR of all heap sizes. Zero means the player to move is losing
    /// under optimal play.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }

    /// Check a move against the current heaps.
    pub fn validate_move(&self, mv: &HeapMove) -> Result<(), ValidationError> {
        if mv.count == 0 {
            return Err(ValidationError::ZeroCount);
        }

        let size = *self
            .heaps
            .get(mv.heap)
            .ok_or(ValidationError::HeapOutOfRange {
                heap: mv.heap,
                heaps: self.heaps.len(),
            })?;

        if mv.count > size {
            return Err(ValidationError::CountExceedsHeap {
                heap: mv.heap,
                count: mv.count,
                size,
            });
        }
        Ok(())
    }
}

impl GameState for NimState {
    type Move = HeapMove;

    fn legal_moves(&self) -> Vec<HeapMove> {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| (1..=size).map(move |count| HeapMove { heap, count }))
            .collect()
    }

    fn apply_move(&self, mv: &HeapMove) -> Self {
        let mut heaps = self.heaps.clone();
        heaps[mv.heap] -= mv.count;

        Self {
            heaps,
            current: self.other,
            other: self.current,
        }
    }

    fn make_move(&self, mv: &HeapMove) -> Result<Self, MoveError> {
        self.validate_move(mv)?;
        Ok(self.apply_move(mv))
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn other_player(&self) -> Player {
        self.other
    }

    fn is_finished(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    fn result(&self) -> Option<GameResult> {
        // The player who emptied the last heap is the one who just moved.
        self.is_finished().then_some(GameResult::Winner(self.other))
    }
}

impl std::fmt::Display for NimState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &size) in self.heaps.iter().enumerate() {
            writeln!(f, "{}: {}", i + 1, "*".repeat(size as usize))?;
        }
        write!(f, "{} to move", self.current)
    }
}
