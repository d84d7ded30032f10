//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search is generic over any [`GameState`] and takes its leaf
//! heuristic as an injected [`Evaluator`]. Every node receives its state by
//! shared reference and its window by value, so sibling subtrees never
//! share mutated bounds.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameRng, Player};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::evaluator::{Evaluator, Score, WIN_SCORE};
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the evaluator, configuration, tie-break RNG and statistics of the
/// last search.
pub struct MinimaxSearch<V> {
    /// Leaf heuristic.
    evaluator: V,

    /// Search configuration.
    config: SearchConfig,

    /// RNG for tie-breaking.
    rng: GameRng,

    /// Statistics of the most recent `find_best_move`.
    stats: SearchStats,
}

impl<V> MinimaxSearch<V> {
    /// Create a new search context.
    pub fn new(evaluator: V, config: SearchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            evaluator,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Create a search context with default configuration.
    pub fn with_evaluator(evaluator: V) -> Self {
        Self::new(evaluator, SearchConfig::default())
    }

    /// Get search statistics of the last `find_best_move`.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the evaluator.
    pub fn evaluator(&self) -> &V {
        &self.evaluator
    }

    /// Re-seed the tie-break RNG.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = GameRng::new(seed);
    }

    /// Score `state` with alpha-beta pruning.
    ///
    /// `is_maximizing` is the role of the player to move in `state`;
    /// children take the role of their own player to move, so a player who
    /// keeps the move (a capture continuation) stays maximizing.
    pub fn alpha_beta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        is_maximizing: bool,
        maximizing_player: Player,
    ) -> Score
    where
        S: GameState,
        V: Evaluator<S>,
    {
        self.stats.nodes += 1;

        if depth == 0 || state.is_finished() {
            self.stats.leaf_evaluations += 1;
            return self.evaluator.evaluate(state, maximizing_player);
        }

        let moves = state.legal_moves();

        if is_maximizing {
            let mut best = -WIN_SCORE;
            for mv in &moves {
                let child = state.apply_move(mv);
                let child_max = child.current_player() == maximizing_player;
                let value = self.alpha_beta(&child, depth - 1, alpha, beta, child_max, maximizing_player);
                best = best.max(value);
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = WIN_SCORE;
            for mv in &moves {
                let child = state.apply_move(mv);
                let child_max = child.current_player() == maximizing_player;
                let value = self.alpha_beta(&child, depth - 1, alpha, beta, child_max, maximizing_player);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Score `state` by plain minimax, visiting every node.
    ///
    /// Returns the same value as [`alpha_beta`](Self::alpha_beta) with an
    /// open window; kept as the reference for checking the pruning.
    pub fn minimax<S>(&mut self, state: &S, depth: u32, is_maximizing: bool, maximizing_player: Player) -> Score
    where
        S: GameState,
        V: Evaluator<S>,
    {
        self.stats.nodes += 1;

        if depth == 0 || state.is_finished() {
            self.stats.leaf_evaluations += 1;
            return self.evaluator.evaluate(state, maximizing_player);
        }

        let mut best = if is_maximizing { -WIN_SCORE } else { WIN_SCORE };
        for mv in state.legal_moves() {
            let child = state.apply_move(&mv);
            let child_max = child.current_player() == maximizing_player;
            let value = self.minimax(&child, depth - 1, child_max, maximizing_player);
            best = if is_maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    /// Pick the move with the highest minimax value for the player to move.
    ///
    /// Each child is searched `depth - 1` plies deeper with a fresh window.
    /// A depth of 0 is treated as 1. Ties are broken with the search RNG, so
    /// a fixed seed gives a fixed choice. Returns `None` if there are no
    /// legal moves.
    pub fn find_best_move<S>(&mut self, state: &S, depth: u32) -> Option<S::Move>
    where
        S: GameState,
        V: Evaluator<S>,
    {
        let start = Instant::now();
        self.stats.reset();

        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }

        let me = state.current_player();
        let child_depth = depth.saturating_sub(1);

        let mut best_value = -WIN_SCORE;
        let mut best_moves: Vec<&S::Move> = Vec::new();

        for mv in &moves {
            let child = state.apply_move(mv);
            let child_max = child.current_player() == me;
            let value = self.alpha_beta(&child, child_depth, -WIN_SCORE, WIN_SCORE, child_max, me);

            if best_moves.is_empty() || value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            player = %me,
            depth,
            candidates = moves.len(),
            best_value,
            ties = best_moves.len(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "best move search finished"
        );

        self.rng.choose(&best_moves).map(|&mv| mv.clone())
    }

    /// [`find_best_move`](Self::find_best_move) at the configured depth.
    pub fn best_move<S>(&mut self, state: &S) -> Option<S::Move>
    where
        S: GameState,
        V: Evaluator<S>,
    {
        let depth = self.config.depth;
        self.find_best_move(state, depth)
    }
}
