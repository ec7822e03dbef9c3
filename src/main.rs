use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use std::time::{Duration, Instant};

use connect4_agent::*;

mod console;
use console::*;

/// Directory holding the `4ki.txt` .. `7ki.txt` score tables
const TABLE_DIR: &str = "eval";

/// Wall-clock budget for one search-mode decision
const SEARCH_BUDGET: Duration = Duration::from_secs(8);

fn main() -> Result<()> {
    println!("Welcome to Connect 4\n");

    // check for score tables; search mode needs them, rule mode does not
    let mut tables: Option<ScoreTables> = None;
    match ScoreTables::load(TABLE_DIR) {
        Ok(loaded) => tables = Some(loaded),
        Err(err) => {
            println!("Could not load score tables: {}", err);
            println!("Search mode is unavailable, the AI will play rule-based only.\n");
        }
    }

    let human_first = prompt_yes_no("Do you want to play first?")?;

    let mut board = Board::new();
    let mut human_turn = human_first;
    let mut ai_turns = 0usize;

    loop {
        draw_board(&board)?;

        match board.winner() {
            Some(Cell::Ai) => {
                println!("*** AI wins! ***");
                break;
            }
            Some(Cell::Human) => {
                println!("*** You win! ***");
                break;
            }
            _ => {}
        }

        let legal = board.legal_moves(MoveOrdering::CenterFirst);
        if legal.is_empty() {
            println!("--- It's a draw ---");
            break;
        }

        if human_turn {
            let column = prompt_human_move(&board)?;
            let slot = Slot {
                // the column was checked by the prompt
                row: board.open_row(column).unwrap(),
                column,
            };
            board.place(slot, Cell::Human);
        } else {
            ai_turns += 1;
            let start = Instant::now();

            let column = if ai_turns == 1 && !human_first {
                // scripted opening, no point analysing an empty board
                legal[1].column
            } else {
                ai_turn(&mut board, &legal, tables.as_ref())?
            };

            println!(
                "AI plays column {} ({:.2}s)",
                column + 1,
                start.elapsed().as_secs_f64()
            );

            let slot = Slot {
                // the AI never picks a full column
                row: board.open_row(column).unwrap(),
                column,
            };
            board.place(slot, Cell::Ai);
        }

        human_turn = !human_turn;
    }

    Ok(())
}

/// Resolves one AI move: immediate win, then immediate block, then the
/// decision mode chosen for this turn
fn ai_turn(board: &mut Board, legal: &[Slot], tables: Option<&ScoreTables>) -> Result<usize> {
    if let Some(index) = find_critical_move(board, legal, Role::Attack) {
        println!("Critical attack! AI sees a win.");
        return Ok(legal[index].column);
    }
    if let Some(index) = find_critical_move(board, legal, Role::Protect) {
        println!("Critical defense! AI is blocking a threat.");
        return Ok(legal[index].column);
    }

    let mode = match tables {
        Some(_) => prompt_mode()?,
        // no tables loaded, search mode is off the menu
        None => Mode::RuleBased,
    };

    let spinner = thinking_spinner();
    let column = match (mode, tables) {
        (Mode::Search, Some(tables)) => decide_move(board, legal, mode, SEARCH_BUDGET, tables)?,
        _ => {
            let empty = ScoreTables::new();
            decide_move(board, legal, Mode::RuleBased, SEARCH_BUDGET, &empty)?
        }
    };
    spinner.finish_and_clear();

    Ok(column)
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} AI is thinking..."));
    spinner.enable_steady_tick(100);
    spinner
}
