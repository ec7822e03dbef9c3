//! Immediate win and immediate block detection
//!
//! These checks run before the main decision modes to handle forced
//! situations without any tree search. Both entry points take the current
//! legal-move list and return an index into it, so a hit is always a
//! playable move.

use crate::board::{Board, Cell, Slot};
use crate::{HEIGHT, WIDTH};

// the four line axes as (row step, column step)
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Finds a legal move that completes four in a row for the AI, returning
/// its index in `legal`
///
/// Candidate cells are scanned in row-major order (row 0 to 5, column 0 to
/// 6) and the first hit wins, so ties break by board position
pub fn attack_move(board: &Board, legal: &[Slot]) -> Option<usize> {
    critical_index(board, legal, Cell::Ai)
}

/// Finds the legal move that occupies the completing cell of an opponent
/// three, returning its index in `legal`
///
/// Detects solid threes as well as gapped ones such as `x x _ x`, where
/// the gap is the only completing cell
pub fn protect_move(board: &Board, legal: &[Slot]) -> Option<usize> {
    critical_index(board, legal, Cell::Human)
}

fn critical_index(board: &Board, legal: &[Slot], player: Cell) -> Option<usize> {
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if !board.get(row, column).is_empty() {
                continue;
            }
            // an empty cell above an unfilled cell is not yet playable
            let index = match legal
                .iter()
                .position(|slot| slot.row == row && slot.column == column)
            {
                Some(index) => index,
                None => continue,
            };
            if completes_four(board, row, column, player) {
                return Some(index);
            }
        }
    }
    None
}

/// Would placing `player` at (row, column) complete a four-in-a-row?
///
/// Checks every window of four cells through the target along all four
/// axes, which covers the solid patterns `xxx_`/`_xxx` and the gapped
/// patterns `xx_x`/`x_xx` alike
fn completes_four(board: &Board, row: usize, column: usize, player: Cell) -> bool {
    for &(row_step, column_step) in AXES.iter() {
        'window: for start in -3i32..=0 {
            for offset in 0..4i32 {
                let step = start + offset;
                if step == 0 {
                    // the cell being played
                    continue;
                }
                let r = row as i32 + row_step * step;
                let c = column as i32 + column_step * step;
                if r < 0 || r >= HEIGHT as i32 || c < 0 || c >= WIDTH as i32 {
                    continue 'window;
                }
                if board.get(r as usize, c as usize) != player {
                    continue 'window;
                }
            }
            return true;
        }
    }
    false
}
