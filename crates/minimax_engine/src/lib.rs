//! Fixed-depth minimax chess engine.
//!
//! Minimax search with alpha-beta pruning over a plain material
//! evaluation. Move generation, move application, and terminal-state
//! detection are delegated to [`cozy_chess`]; this crate only decides
//! which move to play.
//!
//! The engine plays the Black side: [`pick_best_move`] minimizes the
//! White-positive score returned by [`search`] and [`evaluate`].

mod difficulty;
mod eval;
mod search;

pub use difficulty::{difficulty, search_depth, set_difficulty, Difficulty};
pub use eval::{evaluate, piece_value, MATE_SCORE};
pub use search::{pick_best_move, search};
