//! A heuristic agent for playing the board game 'Connect 4'
//!
//! The agent resolves each of its turns to a single playable column. It
//! first looks for an immediate win or an immediate block with the critical
//! move detector, then falls back to one of two decision modes: a
//! time-bounded iterative-deepening alpha-beta search over precomputed
//! pattern score tables, or a faster table-free rule evaluator.
//!
//! # Basic Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use connect4_agent::{decide_move, Board, Mode, MoveOrdering, ScoreTables};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let tables = ScoreTables::load("eval")?;
//! let mut board = Board::new();
//!
//! let legal = board.legal_moves(MoveOrdering::CenterFirst);
//! let column = decide_move(&mut board, &legal, Mode::Search, Duration::from_secs(8), &tables)?;
//!
//! assert!(column < connect4_agent::WIDTH);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod critical;

pub mod tables;

pub mod evaluate;

pub mod search;

pub mod rule;

pub mod engine;


pub use board::{Board, Cell, MoveOrdering, Slot};
pub use engine::{decide_move, find_critical_move, Mode, Role, Strategy};
pub use search::Searcher;
pub use tables::ScoreTables;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the diagonal enumeration and the score-table keys are fixed to the
// standard 7x6 board
const_assert!(WIDTH == 7);
const_assert!(HEIGHT == 6);
