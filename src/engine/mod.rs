//! Move engine: group transfer, rejection reasons, undo history.
//!
//! All board mutation funnels through [`try_move`] and [`undo_move`]. Both
//! leave the board untouched on failure; there is no partially-applied
//! state to recover from.

pub mod history;
pub mod moves;

pub use history::{MoveHistory, MoveRecord};
pub use moves::{try_move, undo_move, MoveOutcome};

pub(crate) use moves::check_move;
