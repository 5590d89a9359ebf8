//! Win and stuck detection.
//!
//! Runs after every accepted mutation. Both checks are pure reads over the
//! board; the session owns turning their answers into state transitions.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::moves::check_move;

/// Where the board stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// Moves remain and the puzzle is unsolved.
    #[default]
    Playing,
    /// Every kind is fully grouped. Terminal.
    Complete,
    /// No legal move exists and the puzzle is unsolved. Undo escapes this.
    Stuck,
}

/// True iff every kind's items sit together in exactly one stack.
///
/// Since a kind never has more than `CAPACITY` items on the board, that is
/// the same as: every non-empty stack is single-kind and full. A kind split
/// across two short single-kind stacks fails the full check, so partial
/// groupings are not complete.
#[must_use]
pub fn is_complete(board: &Board) -> bool {
    board
        .stacks()
        .iter()
        .all(|stack| stack.is_empty() || (stack.is_single_kind() && stack.is_full()))
}

/// True if at least one legal move exists.
///
/// An empty stack accepts any group, so any empty stack short-circuits to
/// true. Otherwise every ordered pair of stacks is checked against the same
/// legality predicate `try_move` uses.
#[must_use]
pub fn has_any_legal_move(board: &Board) -> bool {
    if board.stacks().iter().any(|stack| stack.is_empty()) {
        return true;
    }

    let n = board.stack_count();
    for from in 0..n {
        for to in 0..n {
            if from != to && check_move(board, from, to).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Classify the board: complete beats stuck (a solved board with spare empty
/// stacks still has "moves", but the game is over).
#[must_use]
pub fn evaluate(board: &Board) -> BoardStatus {
    if is_complete(board) {
        BoardStatus::Complete
    } else if has_any_legal_move(board) {
        BoardStatus::Playing
    } else {
        BoardStatus::Stuck
    }
}
