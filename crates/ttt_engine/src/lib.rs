pub mod search;

pub use search::{alpha_beta, find_best_move, SearchError};
