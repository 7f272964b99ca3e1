use std::fmt;

use crate::board::SIZE;

/// A move: the coordinates of the cell the mover claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: u8, // 0-2
    pub col: u8, // 0-2
}

impl Move {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < SIZE && (col as usize) < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
