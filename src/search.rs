//! Iterative-deepening alpha-beta search
//!
//! The searcher deepens one ply at a time under a wall-clock budget,
//! always keeping the answer of the last fully completed depth. Time is
//! checked cooperatively: at iteration boundaries and before each root
//! move, never inside the recursion.

use std::time::{Duration, Instant};

use crate::board::{Board, Cell, MoveOrdering};
use crate::evaluate::evaluate;
use crate::tables::ScoreTables;

/// Hard ceiling on the search depth
pub const MAX_DEPTH: usize = 9;

/// An agent that picks a column by searching hypothetical move sequences,
/// scoring leaves with the pattern-table evaluator
///
/// # Notes
/// Root moves are ordered centre-first, and alpha is deliberately carried
/// forward across successive root moves within one iteration instead of
/// being reset per sibling. The carried alpha only ever tightens the lower
/// bound, so later siblings are pruned against the best line found so far;
/// this is principal-variation-style pruning, not over-pruning.
pub struct Searcher {
    /// The number of nodes visited so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Picks a column for the AI within the given wall-clock budget
    ///
    /// The caller's board is never left mutated: each iteration searches a
    /// copy. Returns `None` only when there is no column left to play; if
    /// not even depth 1 completes in time, the centre-most legal column is
    /// returned.
    pub fn decide(
        &mut self,
        board: &Board,
        budget: Duration,
        tables: &ScoreTables,
    ) -> Option<usize> {
        let start = Instant::now();
        let legal = board.legal_moves(MoveOrdering::CenterFirst);
        if legal.is_empty() {
            return None;
        }

        // the centre-most legal column, until a completed depth says better
        let mut best_index = 0;

        for depth in 1..=MAX_DEPTH {
            if start.elapsed() >= budget {
                break;
            }

            let mut scratch = board.clone();
            match self.root_search(&mut scratch, depth, start, budget, tables) {
                Some(index) => best_index = index,
                // out of time mid-iteration, keep the previous depth's answer
                None => break,
            }

            // don't start an iteration that probably can't finish
            if start.elapsed() > budget / 2 {
                break;
            }
        }

        Some(legal[best_index].column)
    }

    /// Evaluates every root move to a fixed depth, returning the index of
    /// the best one in the centre-first legal-move list, or `None` if the
    /// budget ran out before all root moves were searched
    pub(crate) fn root_search(
        &mut self,
        board: &mut Board,
        depth: usize,
        start: Instant,
        budget: Duration,
        tables: &ScoreTables,
    ) -> Option<usize> {
        let mut alpha = i64::MIN;
        let beta = i64::MAX;

        let moves = board.legal_moves(MoveOrdering::CenterFirst);
        let mut best_score = i64::MIN;
        let mut best_index = 0;

        for (index, &slot) in moves.iter().enumerate() {
            if start.elapsed() >= budget {
                return None;
            }

            let mut placed = board.place_scoped(slot, Cell::Ai);
            let score = self.min_value(&mut placed, depth - 1, alpha, beta, tables);
            drop(placed);

            if score > best_score {
                best_score = score;
                best_index = index;
            }
            // carried forward to prune later root siblings
            alpha = alpha.max(best_score);
        }

        Some(best_index)
    }

    fn max_value(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i64,
        beta: i64,
        tables: &ScoreTables,
    ) -> i64 {
        self.node_count += 1;

        let moves = board.legal_moves(MoveOrdering::CenterFirst);
        if depth == 0 || moves.is_empty() {
            return evaluate(board, tables);
        }

        let mut value = i64::MIN;
        for &slot in moves.iter() {
            let mut placed = board.place_scoped(slot, Cell::Ai);
            value = value.max(self.min_value(&mut placed, depth - 1, alpha, beta, tables));
            drop(placed);

            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    fn min_value(
        &mut self,
        board: &mut Board,
        depth: usize,
        alpha: i64,
        mut beta: i64,
        tables: &ScoreTables,
    ) -> i64 {
        self.node_count += 1;

        let moves = board.legal_moves(MoveOrdering::CenterFirst);
        if depth == 0 || moves.is_empty() {
            return evaluate(board, tables);
        }

        let mut value = i64::MAX;
        for &slot in moves.iter() {
            let mut placed = board.place_scoped(slot, Cell::Human);
            value = value.min(self.max_value(&mut placed, depth - 1, alpha, beta, tables));
            drop(placed);

            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
