//! Table-free rule-based move choice
//!
//! A faster, weaker alternative to the tree search: each playable column
//! is scored directly from the line threats around its drop cell, in
//! constant work per column.

use crate::board::{Board, Cell, MoveOrdering, Slot};
use crate::{HEIGHT, WIDTH};

/// A completed four at the drop cell
const WIN_SCORE: f64 = 10_000.0;
/// A three open at both ends
const OPEN_THREE_SCORE: f64 = 5_000.0;
/// A three blocked on one side
const HALF_OPEN_THREE_SCORE: f64 = 1_000.0;
/// Blocking is worth slightly more than attacking
const DEFENSE_BIAS: f64 = 1.1;
/// Score given to full columns so they never win the comparison
const UNPLAYABLE_SCORE: f64 = -99_999.0;

/// Column priorities for the opening, when no threat exists anywhere
const OPENING_PRIORITY: [f64; WIDTH] = [1.0, 2.0, 5.0, 10.0, 5.0, 2.0, 1.0];

// the four line axes as (row step, column step)
const AXES: [(i32, i32); 4] = [(-1, -1), (-1, 0), (-1, 1), (0, -1)];

/// Picks a column for the AI without searching
///
/// Per playable column: offense is the AI's strongest line through the
/// drop cell, defense the opponent's (scaled up slightly to bias towards
/// blocking), and a move that opens a winning reply directly above itself
/// takes a large penalty. Ties break on the leftmost column. Returns
/// `None` when every column is full.
pub fn rule_decide(board: &mut Board) -> Option<usize> {
    let legal = board.legal_moves(MoveOrdering::LeftToRight);
    if legal.is_empty() {
        return None;
    }

    let mut scores = [UNPLAYABLE_SCORE; WIDTH];
    for &slot in legal.iter() {
        let offense = line_threat(board, slot.row, slot.column, Cell::Ai);
        let defense = line_threat(board, slot.row, slot.column, Cell::Human) * DEFENSE_BIAS;
        let penalty = setup_risk(board, slot);

        scores[slot.column] = offense.max(defense) + penalty;
    }

    // opening position: nothing to attack or defend, use the fixed
    // centre-biased priorities instead
    if scores.iter().all(|&score| score == 0.0) {
        for &slot in legal.iter() {
            scores[slot.column] = OPENING_PRIORITY[slot.column];
        }
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_column = 0;
    for (column, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            best_column = column;
        }
    }
    Some(best_column)
}

/// The strongest line `player` would hold after playing (row, column),
/// taken as the maximum over the four axes
pub(crate) fn line_threat(board: &Board, row: usize, column: usize, player: Cell) -> f64 {
    let mut best = 0.0;

    for &(row_step, column_step) in AXES.iter() {
        let (front_run, front_blocked) =
            run_length(board, row, column, row_step, column_step, player);
        let (back_run, back_blocked) =
            run_length(board, row, column, -row_step, -column_step, player);
        let length = 1 + front_run + back_run;

        let score = if length >= 4 {
            WIN_SCORE
        } else if length == 3 {
            if !front_blocked && !back_blocked {
                OPEN_THREE_SCORE
            } else if !front_blocked || !back_blocked {
                HALF_OPEN_THREE_SCORE
            } else {
                0.0
            }
        } else {
            0.0
        };

        if score > best {
            best = score;
        }
    }
    best
}

/// Counts consecutive `player` pieces stepping away from (row, column),
/// and whether the run ends against another piece or the board edge
fn run_length(
    board: &Board,
    row: usize,
    column: usize,
    row_step: i32,
    column_step: i32,
    player: Cell,
) -> (usize, bool) {
    let mut length = 0;
    for step in 1..4i32 {
        let r = row as i32 + row_step * step;
        let c = column as i32 + column_step * step;
        if r < 0 || r >= HEIGHT as i32 || c < 0 || c >= WIDTH as i32 {
            return (length, true);
        }
        match board.get(r as usize, c as usize) {
            cell if cell == player => length += 1,
            Cell::Empty => return (length, false),
            _ => return (length, true),
        }
    }
    (length, false)
}

/// Penalty for a move that hands the opponent a winning reply in the cell
/// directly above it
///
/// The move is played under a scope guard, so the board is restored before
/// returning.
fn setup_risk(board: &mut Board, slot: Slot) -> f64 {
    if slot.row + 1 >= HEIGHT {
        return 0.0;
    }

    let placed = board.place_scoped(slot, Cell::Ai);
    let reply_threat = line_threat(&placed, slot.row + 1, slot.column, Cell::Human);
    drop(placed);

    if reply_threat >= WIN_SCORE {
        -reply_threat
    } else {
        0.0
    }
}
