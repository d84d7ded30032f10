//! Nim integration tests.

use proptest::prelude::*;

use rust_duel::core::{MoveError, Player, ValidationError};
use rust_duel::games::nim::{HeapMove, NimState};
use rust_duel::rules::{GameResult, GameState};

// =============================================================================
// Rules
// =============================================================================

#[test]
fn test_custom_players() {
    let state = NimState::new(&[1, 1], Player::new('A'), Player::new('B'));

    let next = state.make_move(&HeapMove::new(0, 1).unwrap()).unwrap();
    let done = next.make_move(&HeapMove::new(1, 1).unwrap()).unwrap();

    assert_eq!(done.result(), Some(GameResult::Winner(Player::new('B'))));
}

#[test]
fn test_full_game_alternates() {
    let mut state = NimState::with_heaps(&[2, 1]);
    let mut movers = Vec::new();

    while let Some(mv) = state.legal_moves().first().cloned() {
        movers.push(state.current_player().label());
        state = state.make_move(&mv).unwrap();
    }

    assert_eq!(movers, vec!['1', '2', '1']);
    assert!(state.is_finished());
    assert_eq!(state.winner(), Some(Player::new('1')));
}

#[test]
fn test_empty_heap_rejected() {
    let state = NimState::with_heaps(&[0, 3]);
    let err = state.make_move(&HeapMove::new(0, 1).unwrap()).unwrap_err();

    assert_eq!(
        err,
        MoveError::Invalid(ValidationError::CountExceedsHeap {
            heap: 0,
            count: 1,
            size: 0
        })
    );
    assert_eq!(err.to_string(), "cannot remove 1 items from heap 0 holding 0");
}

#[test]
fn test_no_heaps_is_finished() {
    let state = NimState::with_heaps(&[]);
    assert!(state.is_finished());
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_heap_move_serialization() {
    let mv = HeapMove::new(2, 3).unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    let back: HeapMove = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, back);
}

#[test]
fn test_heap_move_deserialization_validates() {
    let err = serde_json::from_str::<HeapMove>(r#"{"heap":0,"count":0}"#).unwrap_err();
    assert!(err.to_string().contains("at least one item"));

    let mv: HeapMove = serde_json::from_str(r#"{"heap":1,"count":2}"#).unwrap();
    assert_eq!(mv, HeapMove::new(1, 2).unwrap());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_moves_exist_until_empty(heaps in prop::collection::vec(0u32..6, 0..5)) {
        let state = NimState::with_heaps(&heaps);
        let total: u32 = heaps.iter().sum();

        prop_assert_eq!(state.legal_moves().len() as u32, total);
        prop_assert_eq!(state.is_finished(), total == 0);
    }

    #[test]
    fn prop_make_move_never_mutates(
        heaps in prop::collection::vec(1u32..6, 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let state = NimState::with_heaps(&heaps);
        let before = state.clone();
        let moves = state.legal_moves();
        let mv = &moves[pick.index(moves.len())];

        let next = state.make_move(mv).unwrap();

        prop_assert_eq!(&state, &before);
        prop_assert_eq!(next.heaps()[mv.heap()], heaps[mv.heap()] - mv.count());
        prop_assert_eq!(next.current_player(), before.other_player());
    }
}
