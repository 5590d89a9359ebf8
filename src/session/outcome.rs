//! Values the session emits for the presentation layer.
//!
//! Every accepted mutation hands back a full board snapshot plus the ids
//! of the items that traveled, so the adapter can animate the difference
//! without diffing boards itself.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{ItemId, CAPACITY};
use crate::engine::MoveRecord;
use crate::error::MoveError;
use crate::evaluator::BoardStatus;

/// An accepted move, as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveApplied {
    /// The transfer that happened.
    pub record: MoveRecord,
    /// Ids of the moved items, top first.
    pub items: SmallVec<[ItemId; CAPACITY]>,
    /// Board snapshot after the move.
    pub board: Board,
    /// Session status after the move.
    pub status: BoardStatus,
    /// True exactly once: on the move that completed the puzzle.
    pub just_completed: bool,
}

/// An accepted undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoApplied {
    /// The record that was reversed.
    pub record: MoveRecord,
    /// Ids of the items that traveled back, top first.
    pub items: SmallVec<[ItemId; CAPACITY]>,
    /// Board snapshot after the undo.
    pub board: Board,
    /// Session status after the undo (a stuck session becomes playable).
    pub status: BoardStatus,
}

/// What a stack click did.
///
/// The selection protocol is stateless beyond "currently selected stack":
/// first click selects, second click attempts the move, and the selection
/// is cleared afterwards whatever the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A non-empty stack became the pending source.
    Selected { stack: usize },
    /// The selected stack was clicked again; selection cleared, no move.
    Deselected,
    /// The pending move was legal and applied.
    Moved(MoveApplied),
    /// The pending move was illegal; selection cleared, board unchanged.
    Rejected { reason: MoveError },
    /// Nothing to do (empty stack with no selection, or finished session).
    Ignored,
}
