//! Decision entry points and strategy dispatch

use anyhow::{anyhow, Result};

use std::time::Duration;

use crate::board::{Board, Slot};
use crate::critical;
use crate::rule::rule_decide;
use crate::search::Searcher;
use crate::tables::ScoreTables;

/// Decision mode requested by the caller
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Mode {
    /// Iterative-deepening alpha-beta over the pattern tables
    /// (slower, stronger)
    Search,
    /// Table-free local threat analysis (faster, simpler)
    RuleBased,
}

/// Which side the critical move detector works for
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Role {
    /// Find a move that wins immediately
    Attack,
    /// Find a move that blocks the opponent's immediate win
    Protect,
}

/// Everything the agent knows how to do on its turn
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Strategy {
    CriticalAttack,
    CriticalProtect,
    Search,
    RuleBased,
}

impl Strategy {
    /// Single dispatch point for all decision strategies
    ///
    /// Returns the chosen column, or `None` when the strategy has nothing
    /// to offer (no critical move on the board, or nothing left to play)
    pub fn run(
        self,
        board: &mut Board,
        legal: &[Slot],
        budget: Duration,
        tables: &ScoreTables,
    ) -> Option<usize> {
        match self {
            Strategy::CriticalAttack => {
                critical::attack_move(board, legal).map(|index| legal[index].column)
            }
            Strategy::CriticalProtect => {
                critical::protect_move(board, legal).map(|index| legal[index].column)
            }
            Strategy::Search => Searcher::new().decide(board, budget, tables),
            Strategy::RuleBased => rule_decide(board),
        }
    }
}

/// Finds an immediate winning or blocking move, returning its index in
/// `legal`
pub fn find_critical_move(board: &Board, legal: &[Slot], role: Role) -> Option<usize> {
    match role {
        Role::Attack => critical::attack_move(board, legal),
        Role::Protect => critical::protect_move(board, legal),
    }
}

/// Resolves one playable column for the AI: an immediate win first, then
/// an immediate block, then the requested decision mode
///
/// `legal` must be the current legal-move list for `board`. Fails when it
/// is empty (a drawn or otherwise finished position); callers are expected
/// to have checked the game state already.
pub fn decide_move(
    board: &mut Board,
    legal: &[Slot],
    mode: Mode,
    budget: Duration,
    tables: &ScoreTables,
) -> Result<usize> {
    if legal.is_empty() {
        return Err(anyhow!("no legal moves, every column is full"));
    }

    let strategies = [
        Strategy::CriticalAttack,
        Strategy::CriticalProtect,
        match mode {
            Mode::Search => Strategy::Search,
            Mode::RuleBased => Strategy::RuleBased,
        },
    ];

    for strategy in strategies.iter() {
        if let Some(column) = strategy.run(board, legal, budget, tables) {
            return Ok(column);
        }
    }

    // unreachable with a non-empty move list, but never fail to move
    Ok(legal[0].column)
}
