//! State evaluator: completion, stuck detection, and solvability search.

pub mod solver;
pub mod status;

pub use solver::{is_solvable, solve};
pub use status::{evaluate, has_any_legal_move, is_complete, BoardStatus};
