use log::debug;
use thiserror::Error;
use ttt_core::{GameState, Mark, Move};

// Search window bounds. Terminal utilities are only ever -1, 0 or +1,
// so any value outside that range serves as infinity.
const ALPHA_INIT: i32 = i32::MIN;
const BETA_INIT: i32 = i32::MAX;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("no legal moves in this position")]
    NoLegalMoves,
}

/// Minimax value of `state`, searched depth-first to terminal positions
/// with alpha-beta pruning.
///
/// X is the maximizing side and O the minimizing side, matching the
/// sign convention of [`GameState::utility`]. The full remaining game
/// tree is expanded every call; with at most 9 plies there is no need
/// for a depth cutoff or a transposition table.
pub fn alpha_beta(state: &GameState, mut alpha: i32, mut beta: i32) -> i32 {
    if state.is_terminal() {
        return state.utility();
    }

    if state.player() == Mark::X {
        // Maximizing player
        let mut value = ALPHA_INIT;
        for mv in state.legal_moves() {
            if let Ok(next) = state.apply_move(mv) {
                value = value.max(alpha_beta(&next, alpha, beta));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
        }
        value
    } else {
        // Minimizing player
        let mut value = BETA_INIT;
        for mv in state.legal_moves() {
            if let Ok(next) = state.apply_move(mv) {
                value = value.min(alpha_beta(&next, alpha, beta));
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
        }
        value
    }
}

/// Picks the legal move whose successor scores highest under
/// [`alpha_beta`], searching each with a full window. Ties go to the
/// earliest move in row-major order.
///
/// The top level always maximizes, without consulting `state.player()`;
/// the function is meant for positions where X is to move. Calling it
/// with O to move will still return a move, but one chosen from the
/// maximizing side's point of view.
pub fn find_best_move(state: &GameState) -> Result<Move, SearchError> {
    let mut best: Option<(Move, i32)> = None;

    for mv in state.legal_moves() {
        if let Ok(next) = state.apply_move(mv) {
            let value = alpha_beta(&next, ALPHA_INIT, BETA_INIT);
            debug!("move {mv} evaluated at {value}");
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((mv, value)),
            }
        }
    }

    match best {
        Some((mv, value)) => {
            debug!("best move {mv} with value {value}");
            Ok(mv)
        }
        None => Err(SearchError::NoLegalMoves),
    }
}
