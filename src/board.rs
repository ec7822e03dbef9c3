use anyhow::{anyhow, Result};

use std::ops::{Deref, DerefMut};

use crate::{HEIGHT, WIDTH};

/// A single cell of the game board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Ai,
    Human,
    /// Marker meaning "if the AI occupied this empty cell", placed only
    /// while generating evaluation lookup keys and always reverted
    Candidate,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    /// The digit this cell contributes to a line key
    pub fn digit(&self) -> u64 {
        match self {
            Cell::Empty => 0,
            Cell::Ai => 1,
            Cell::Human => 2,
            Cell::Candidate => 3,
        }
    }

    /// Parses a persisted cell digit. The candidate marker never appears
    /// outside a running evaluation, so only 0, 1 and 2 are accepted
    pub fn from_digit(digit: u8) -> Result<Self> {
        match digit {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Ai),
            2 => Ok(Cell::Human),
            _ => Err(anyhow!("invalid cell value {}", digit)),
        }
    }

}

/// Where the next piece dropped into a column will land
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

/// Ordering of the legal-move list
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MoveOrdering {
    /// Middle columns first, for search efficiency
    CenterFirst,
    /// Natural column order, for per-column scoring
    LeftToRight,
}

/// Returns the columns ordered from the middle outwards, nearer-left
/// first, as the middle columns are usually the stronger moves
pub const fn column_priority() -> [usize; WIDTH] {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = if i % 2 == 0 {
            WIDTH / 2 + i / 2
        } else {
            WIDTH / 2 - (i / 2 + 1)
        };
        i += 1;
    }
    order
}

/// The 7x6 game board, row 0 at the bottom, filled upwards by gravity
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board from rows of cell digits (0 empty, 1 AI, 2 human),
    /// row 0 at the bottom
    ///
    /// Fails on invalid digits and on boards that violate gravity, i.e.
    /// any occupied cell sitting above an empty cell in the same column
    pub fn from_rows(rows: &[[u8; WIDTH]; HEIGHT]) -> Result<Self> {
        let mut board = Self::new();
        for (row, row_digits) in rows.iter().enumerate() {
            for (column, &digit) in row_digits.iter().enumerate() {
                board.cells[row][column] = Cell::from_digit(digit)?;
            }
        }

        for column in 0..WIDTH {
            let mut gap_below = false;
            for row in 0..HEIGHT {
                if board.cells[row][column].is_empty() {
                    gap_below = true;
                } else if gap_below {
                    return Err(anyhow!(
                        "floating piece at row {}, column {}",
                        row,
                        column
                    ));
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// The lowest empty row of a column, if any
    pub fn open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cells[row][column].is_empty())
    }

    pub fn is_full(&self, column: usize) -> bool {
        self.open_row(column).is_none()
    }

    /// One entry per non-full column, in the requested order. Full columns
    /// are simply omitted
    pub fn legal_moves(&self, ordering: MoveOrdering) -> Vec<Slot> {
        let columns = match ordering {
            MoveOrdering::CenterFirst => column_priority(),
            MoveOrdering::LeftToRight => {
                let mut natural = [0; WIDTH];
                let mut i = 0;
                while i < WIDTH {
                    natural[i] = i;
                    i += 1;
                }
                natural
            }
        };
        columns
            .iter()
            .filter_map(|&column| self.open_row(column).map(|row| Slot { row, column }))
            .collect()
    }

    pub fn place(&mut self, slot: Slot, cell: Cell) {
        self.cells[slot.row][slot.column] = cell;
    }

    pub fn unplace(&mut self, slot: Slot) {
        self.cells[slot.row][slot.column] = Cell::Empty;
    }

    /// Places a piece and returns a guard that reverts the placement when
    /// dropped, so hypothetical moves are undone on every exit path
    pub fn place_scoped(&mut self, slot: Slot, cell: Cell) -> PlacedPiece<'_> {
        self.place(slot, cell);
        PlacedPiece { board: self, slot }
    }

    /// Scans every horizontal, vertical and diagonal window of four for a
    /// completed alignment
    pub fn winner(&self) -> Option<Cell> {
        let aligned = |cells: [Cell; 4]| -> Option<Cell> {
            match cells[0] {
                player @ Cell::Ai | player @ Cell::Human
                    if cells.iter().all(|&cell| cell == player) =>
                {
                    Some(player)
                }
                _ => None,
            }
        };

        // horizontal
        for row in 0..HEIGHT {
            for column in 0..=WIDTH - 4 {
                let window = [
                    self.cells[row][column],
                    self.cells[row][column + 1],
                    self.cells[row][column + 2],
                    self.cells[row][column + 3],
                ];
                if let Some(player) = aligned(window) {
                    return Some(player);
                }
            }
        }
        // vertical
        for column in 0..WIDTH {
            for row in 0..=HEIGHT - 4 {
                let window = [
                    self.cells[row][column],
                    self.cells[row + 1][column],
                    self.cells[row + 2][column],
                    self.cells[row + 3][column],
                ];
                if let Some(player) = aligned(window) {
                    return Some(player);
                }
            }
        }
        // diagonals, both orientations
        for row in 0..=HEIGHT - 4 {
            for column in 0..=WIDTH - 4 {
                let rising = [
                    self.cells[row][column],
                    self.cells[row + 1][column + 1],
                    self.cells[row + 2][column + 2],
                    self.cells[row + 3][column + 3],
                ];
                if let Some(player) = aligned(rising) {
                    return Some(player);
                }
            }
            for column in 3..WIDTH {
                let falling = [
                    self.cells[row][column],
                    self.cells[row + 1][column - 1],
                    self.cells[row + 2][column - 2],
                    self.cells[row + 3][column - 3],
                ];
                if let Some(player) = aligned(falling) {
                    return Some(player);
                }
            }
        }
        None
    }

    /// A board with no winner and no column left to play
    pub fn is_draw(&self) -> bool {
        (0..WIDTH).all(|column| self.is_full(column)) && self.winner().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A hypothetical placement, retracted on drop
pub struct PlacedPiece<'a> {
    board: &'a mut Board,
    slot: Slot,
}

impl Deref for PlacedPiece<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for PlacedPiece<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for PlacedPiece<'_> {
    fn drop(&mut self) {
        self.board.unplace(self.slot);
    }
}
