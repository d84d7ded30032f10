//! Player identification.
//!
//! ## Player
//!
//! A player is an identity token carrying a one-character label
//! (`'1'`, `'2'` for Nim, `'W'`, `'B'` for checkers). Two players exist per
//! game and are compared by label.

use serde::{Deserialize, Serialize};

/// Player identity token.
///
/// The label is the only data a player carries; games keep track of which
/// side a player controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player(pub char);

impl Player {
    /// Create a new player with the given label.
    #[must_use]
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// Get the player's label.
    #[must_use]
    pub const fn label(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
