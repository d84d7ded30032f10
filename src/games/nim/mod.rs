//! Nim: heap-subtraction game under normal play.
//!
//! - Heaps are independent piles of items
//! - On your turn: remove one or more items from a single heap
//! - Whoever takes the last item wins

mod game;

pub use game::{HeapMove, NimState};
