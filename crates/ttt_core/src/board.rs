use std::fmt;

use crate::{Mark, Move};

/// Board side length. The rules are hardwired to 3x3.
pub const SIZE: usize = 3;

// The eight lines that can decide a game: three rows, three columns,
// and the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 grid of cells; `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells[mv.row as usize][mv.col as usize]
    }

    /// Overwrites a single cell. Game play goes through
    /// `GameState::apply_move`; this is the raw accessor for setting up
    /// positions directly, e.g. in tests.
    pub fn set(&mut self, mv: Move, mark: Option<Mark>) {
        self.cells[mv.row as usize][mv.col as usize] = mark;
    }

    /// Every empty cell, in row-major order (row 0 first, left to right).
    /// The order is what makes "first move with the best value" ties
    /// deterministic in the search.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_none() {
                    moves.push(Move {
                        row: row as u8,
                        col: col as u8,
                    });
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// True iff any row, column or diagonal holds three identical marks.
    pub fn has_winning_line(&self) -> bool {
        LINES.iter().any(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            a.is_some() && a == b && b == c
        })
    }
}

impl fmt::Display for Board {
    /// Three rows of space-separated single characters, `-` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "-")?,
                }
            }
        }
        Ok(())
    }
}
