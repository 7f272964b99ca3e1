use crate::{Board, Mark, Move, MoveError};

/// A snapshot of the game: the board plus whose turn it is.
///
/// States are immutable; `apply_move` returns a fresh state and never
/// touches the original, so a search can explore many hypothetical
/// futures from a shared ancestor without interference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    player: Mark,
}

impl GameState {
    /// The starting position: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player: Mark::X,
        }
    }

    /// Builds a state from an arbitrary board and side to move.
    pub fn with_board(board: Board, player: Mark) -> Self {
        Self { board, player }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Mark {
        self.player
    }

    /// Every move available to the side to move, in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.empty_cells()
    }

    /// Places the current player's mark and hands the turn to the
    /// opponent. Fails if the target cell is not empty.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, MoveError> {
        if self.board.get(mv).is_some() {
            return Err(MoveError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut board = self.board;
        board.set(mv, Some(self.player));
        Ok(GameState {
            board,
            player: self.player.opponent(),
        })
    }

    pub fn is_winner(&self) -> bool {
        self.board.has_winning_line()
    }

    /// The game is over once a line is complete or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_winner() || self.board.is_full()
    }

    /// Outcome score of a terminal state, in {-1, 0, +1}.
    ///
    /// The score is taken relative to `player`, the side recorded as
    /// *next to move* -- not the side that just moved. At a terminal
    /// state the completed line always belongs to the opponent of
    /// `player`, so a win scores +1 when X is next to move (O placed the
    /// winning mark) and -1 when O is next to move (X placed it). Draws,
    /// and any position without a completed line, score 0. The search
    /// keys its max/min roles off this same convention, so the two only
    /// make sense together.
    pub fn utility(&self) -> i32 {
        if self.is_winner() {
            if self.player == Mark::X {
                1
            } else {
                -1
            }
        } else {
            0
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
