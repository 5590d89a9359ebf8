//! Session layer: one puzzle from first click to solved.
//!
//! A `Session` binds a generated board to the interaction protocol:
//! select/deselect/transfer clicks, undo, reset, and difficulty changes.
//! Callers that drive moves directly (solvers, tests) can bypass the click
//! protocol with [`Session::try_move`].
//!
//! ## Key Types
//!
//! - `Session`: Board, selection, history, and status in one place
//! - `ClickOutcome`: What a click did (selected, moved, rejected, ...)
//! - `MoveApplied` / `UndoApplied`: Snapshots handed back after mutations

pub mod outcome;
pub mod state;

pub use outcome::{ClickOutcome, MoveApplied, UndoApplied};
pub use state::Session;
