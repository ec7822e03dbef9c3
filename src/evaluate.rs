//! Whole-board static evaluation against the pattern score tables
//!
//! The board is decomposed into every row, every column and every diagonal
//! of length 4 to 6, and each line's table score is summed. Before the
//! sweep, every currently playable cell is marked with the candidate
//! value so the tables can distinguish "the AI could play here" from a
//! plain empty cell.

use crate::board::{Board, Cell, MoveOrdering, Slot};
use crate::tables::ScoreTables;
use crate::{HEIGHT, WIDTH};

/// Every diagonal of length 4 to 6 on the board, as
/// (start row, start column, row step, length); the column always steps +1.
///
/// This enumeration is fixed by the board geometry and must match the one
/// the score tables were built against.
const DIAGONALS: [(usize, usize, i32, usize); 12] = [
    (0, 0, 1, 6),
    (0, 1, 1, 6),
    (5, 0, -1, 6),
    (5, 1, -1, 6),
    (1, 0, 1, 5),
    (0, 2, 1, 5),
    (4, 0, -1, 5),
    (5, 2, -1, 5),
    (2, 0, 1, 4),
    (0, 3, 1, 4),
    (3, 0, -1, 4),
    (5, 3, -1, 4),
];

/// Scores the whole board; higher favours the AI
///
/// The candidate marks are reverted before returning on every path, so the
/// caller's board is left exactly as supplied.
pub fn evaluate(board: &mut Board, tables: &ScoreTables) -> i64 {
    let marks = CandidateMarks::new(board);
    let board = marks.board();

    let mut total = 0;
    let mut line = Vec::with_capacity(MAX_LINE_BUFFER);

    // rows, length 7
    for row in 0..HEIGHT {
        line.clear();
        line.extend((0..WIDTH).map(|column| board.get(row, column)));
        total += tables.line_score(&line);
    }

    // columns, length 6, read bottom to top
    for column in 0..WIDTH {
        line.clear();
        line.extend((0..HEIGHT).map(|row| board.get(row, column)));
        total += tables.line_score(&line);
    }

    // diagonals, lengths 4 to 6
    for &(start_row, start_column, row_step, length) in DIAGONALS.iter() {
        line.clear();
        for i in 0..length {
            let row = (start_row as i32 + row_step * i as i32) as usize;
            line.push(board.get(row, start_column + i));
        }
        total += tables.line_score(&line);
    }

    total
}

const MAX_LINE_BUFFER: usize = WIDTH;

/// Marks every playable cell with the candidate value on creation and
/// clears the marks when dropped, guaranteeing rollback on every exit path
struct CandidateMarks<'a> {
    board: &'a mut Board,
    slots: Vec<Slot>,
}

impl<'a> CandidateMarks<'a> {
    fn new(board: &'a mut Board) -> Self {
        let slots = board.legal_moves(MoveOrdering::CenterFirst);
        for &slot in slots.iter() {
            board.place(slot, Cell::Candidate);
        }
        Self { board, slots }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for CandidateMarks<'_> {
    fn drop(&mut self) {
        for &slot in self.slots.iter() {
            self.board.unplace(slot);
        }
    }
}
