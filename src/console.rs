use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect4_agent::{Board, Cell, Mode, HEIGHT, WIDTH};

/// Draws the board with row 0 at the bottom, AI pieces in red and human
/// pieces in yellow
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.get(row, column) {
                            Cell::Ai => Color::Red,
                            Cell::Human => Color::Yellow,
                            _ => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

/// Prompts until the human enters a playable column, returned zero-indexed
pub fn prompt_human_move(board: &Board) -> Result<usize> {
    let stdin = stdin();
    loop {
        print!("Your move (column 1-{}) > ", WIDTH);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.trim().parse::<usize>() {
            Ok(column @ 1..=WIDTH) => {
                if board.is_full(column - 1) {
                    println!("Invalid move, column {} full", column);
                } else {
                    return Ok(column - 1);
                }
            }
            _ => println!(
                "Invalid move, enter a number between 1 and {}",
                WIDTH
            ),
        }
    }
}

pub fn prompt_yes_no(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        print!("{} y/n: ", question);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Prompts for the AI's decision mode for this turn
pub fn prompt_mode() -> Result<Mode> {
    let stdin = stdin();
    loop {
        println!("\nSelect AI mode for this turn:");
        println!(" [1] Heuristic search (slower, stronger)");
        println!(" [2] Rule based (faster, simpler)");
        print!(">> ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.trim() {
            "1" => return Ok(Mode::Search),
            "2" => return Ok(Mode::RuleBased),
            _ => println!("Unknown answer given, enter 1 or 2"),
        }
    }
}
