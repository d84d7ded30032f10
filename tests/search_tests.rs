//! Minimax search integration tests.

use std::collections::HashSet;

use proptest::prelude::*;

use rust_duel::core::Player;
use rust_duel::games::checkers::{Board, CheckersState};
use rust_duel::games::nim::{HeapMove, NimState};
use rust_duel::rules::GameState;
use rust_duel::search::{
    CheckersEvaluator, Evaluator, MinimaxSearch, NimEvaluator, Score, SearchConfig, WIN_SCORE,
};

/// Scores every position the same, so every move ties.
#[derive(Clone, Copy)]
struct Flat;

impl<S: GameState> Evaluator<S> for Flat {
    fn evaluate(&self, _state: &S, _maximizing: Player) -> Score {
        0.0
    }
}

// =============================================================================
// Nim
// =============================================================================

#[test]
fn test_nim_optimal_move() {
    let state = NimState::with_heaps(&[3, 4, 5]);

    for depth in [1, 3, 5] {
        let mut search = MinimaxSearch::new(NimEvaluator, SearchConfig::default().with_depth(depth));
        let mv = search.best_move(&state).unwrap();

        assert_eq!(mv, HeapMove::new(0, 2).unwrap(), "depth {}", depth);
        assert_eq!(state.make_move(&mv).unwrap().nim_sum(), 0);
    }
}

#[test]
fn test_nim_losing_position_still_moves() {
    let state = NimState::with_heaps(&[1, 1]);
    let mut search = MinimaxSearch::with_evaluator(NimEvaluator);

    assert!(search.find_best_move(&state, 4).is_some());
}

#[test]
fn test_forced_win_scores_infinite() {
    let state = NimState::with_heaps(&[0, 2]);
    let me = state.current_player();
    let mut search = MinimaxSearch::with_evaluator(NimEvaluator);

    assert_eq!(search.alpha_beta(&state, 3, -WIN_SCORE, WIN_SCORE, true, me), WIN_SCORE);
    assert_eq!(search.minimax(&state, 3, true, me), WIN_SCORE);
}

// =============================================================================
// Tie-breaking
// =============================================================================

#[test]
fn test_ties_follow_seed() {
    let state = NimState::with_heaps(&[3, 3]);

    let choose = |seed: u64| {
        let mut search = MinimaxSearch::new(Flat, SearchConfig::default().with_seed(seed));
        search.find_best_move(&state, 1).unwrap()
    };

    assert_eq!(choose(5), choose(5));

    let distinct: HashSet<_> = (0..20).map(choose).collect();
    assert!(distinct.len() > 1, "different seeds should spread over tied moves");
}

#[test]
fn test_reseed_restarts_sequence() {
    let state = NimState::with_heaps(&[3, 3]);
    let mut search = MinimaxSearch::new(Flat, SearchConfig::default().with_seed(3));

    let first: Vec<_> = (0..5).map(|_| search.find_best_move(&state, 1)).collect();
    search.reseed(3);
    let again: Vec<_> = (0..5).map(|_| search.find_best_move(&state, 1)).collect();

    assert_eq!(first, again);
}

// =============================================================================
// Checkers
// =============================================================================

#[test]
fn test_checkers_avoids_hanging_piece() {
    // Stepping to d5 lets the black man jump into the vacated e6.
    let board = Board::from_rows([
        "        ",
        "        ",
        "        ",
        "  b     ",
        "        ",
        "    w   ",
        "        ",
        "        ",
    ])
    .unwrap();
    let state = CheckersState::from_board(board, Player::new('W'), Player::new('B'), true);

    for seed in 0..5 {
        let mut search = MinimaxSearch::new(CheckersEvaluator, SearchConfig::default().with_seed(seed));
        let mv = search.find_best_move(&state, 2).unwrap();
        assert_eq!(mv.to_string(), "e6 -> f5");
    }
}

#[test]
fn test_checkers_takes_last_piece() {
    let board = Board::from_rows([
        "        ",
        "        ",
        "        ",
        "    b   ",
        "   W    ",
        "        ",
        "        ",
        "        ",
    ])
    .unwrap();
    let state = CheckersState::from_board(board, Player::new('W'), Player::new('B'), true);

    let mut search = MinimaxSearch::with_evaluator(CheckersEvaluator);
    let mv = search.find_best_move(&state, 3).unwrap();

    assert!(mv.is_capture());
    assert_eq!(state.make_move(&mv).unwrap().winner(), Some(Player::new('W')));
}

#[test]
fn test_checkers_opening_move_is_legal() {
    let state = CheckersState::standard();
    let mut search = MinimaxSearch::new(CheckersEvaluator, SearchConfig::default().with_depth(3));

    let mv = search.best_move(&state).unwrap();
    assert!(state.legal_moves().contains(&mv));
    assert!(search.stats().cutoffs > 0);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_alpha_beta_matches_minimax(
        heaps in prop::collection::vec(0u32..4, 1..4),
        depth in 0u32..5,
    ) {
        let state = NimState::with_heaps(&heaps);
        let me = state.current_player();
        let mut search = MinimaxSearch::with_evaluator(NimEvaluator);

        let pruned = search.alpha_beta(&state, depth, -WIN_SCORE, WIN_SCORE, true, me);
        let full = search.minimax(&state, depth, true, me);

        prop_assert_eq!(pruned, full);
    }

    #[test]
    fn prop_checkers_alpha_beta_matches_minimax(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
        depth in 0u32..3,
    ) {
        let mut state = CheckersState::standard();
        for pick in picks {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            state = state.apply_move(&moves[pick.index(moves.len())]);
        }

        let me = state.current_player();
        let mut search = MinimaxSearch::with_evaluator(CheckersEvaluator);

        let pruned = search.alpha_beta(&state, depth, -WIN_SCORE, WIN_SCORE, true, me);
        let full = search.minimax(&state, depth, true, me);

        prop_assert_eq!(pruned, full);
    }

    #[test]
    fn prop_best_move_is_legal(
        heaps in prop::collection::vec(0u32..5, 1..4),
        depth in 0u32..4,
        seed in any::<u64>(),
    ) {
        let state = NimState::with_heaps(&heaps);
        let mut search = MinimaxSearch::new(NimEvaluator, SearchConfig::default().with_seed(seed));

        match search.find_best_move(&state, depth) {
            Some(mv) => prop_assert!(state.make_move(&mv).is_ok()),
            None => prop_assert!(state.is_finished()),
        }
    }
}
