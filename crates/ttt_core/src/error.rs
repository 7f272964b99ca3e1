use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },
}
