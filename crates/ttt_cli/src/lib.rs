//! Console driver: the computer plays X via the search engine, the
//! human plays O by typing a row and column.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;
use ttt_core::{GameState, Mark, Move};
use ttt_engine::{find_best_move, SearchError};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("input error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the game finished")]
    InputClosed,
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Plays one game on stdin/stdout.
pub fn run() -> Result<(), GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_game(&mut stdin.lock(), &mut stdout.lock())
}

/// Drives a full game over any input/output pair, alternating the
/// engine's X moves with O moves read from `input`, until the state
/// reports terminal. Prints the board after every applied move.
pub fn play_game<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), GameError> {
    let mut state = GameState::new();

    writeln!(output, "Initial Board:")?;
    writeln!(output, "{}", state.board())?;
    writeln!(output)?;

    while !state.is_terminal() {
        let mv = if state.player() == Mark::X {
            let mv = find_best_move(&state)?;
            debug!("computer plays {mv}");
            mv
        } else {
            writeln!(output, "Player O's turn.")?;
            read_move(input, output)?
        };

        state = match state.apply_move(mv) {
            Ok(next) => next,
            Err(err) => {
                // Only the human path can hit this; ask again.
                writeln!(output, "{err}")?;
                continue;
            }
        };

        writeln!(output, "{}", state.board())?;
        writeln!(output)?;
    }

    writeln!(output, "{}", outcome_message(&state))?;
    Ok(())
}

/// Prompts until the human enters a parseable, in-bounds move.
fn read_move<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Move, GameError> {
    loop {
        write!(output, "Enter row and column: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        match parse_move(&line) {
            Some(mv) => return Ok(mv),
            None => writeln!(output, "Please enter two numbers between 0 and 2.")?,
        }
    }
}

/// Parses exactly two whitespace-separated coordinates, e.g. "1 2".
fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Move::new(row, col)
}

fn outcome_message(state: &GameState) -> &'static str {
    match state.utility() {
        1 => "X wins!",
        -1 => "O wins!",
        _ => "It's a draw!",
    }
}
