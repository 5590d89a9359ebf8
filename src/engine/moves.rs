//! Group transfer between stacks.
//!
//! A move picks up the whole top group of the source stack (the maximal
//! same-kind run) and sets it down on the destination, order preserved.
//! Legality: the group must fit, and the destination must be empty or
//! topped by the same kind.
//!
//! ## Usage
//!
//! ```
//! use stacksort::board::{Board, Stack};
//! use stacksort::core::{Item, ItemId, KindId};
//! use stacksort::engine::try_move;
//!
//! let mut board = Board::from_stacks(vec![
//!     Stack::from_items([
//!         Item::new(ItemId::new(0), KindId::new(1)),
//!         Item::new(ItemId::new(1), KindId::new(1)),
//!     ]),
//!     Stack::new(),
//! ]);
//!
//! let outcome = try_move(&mut board, 0, 1).unwrap();
//! assert_eq!(outcome.record.moved, 2);
//! assert!(board[0].is_empty());
//! assert_eq!(board[1].len(), 2);
//! ```

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{ItemId, CAPACITY};
use crate::error::MoveError;

use super::history::MoveRecord;

/// An accepted move: the record for the history plus the ids of the items
/// that traveled, top first, so the presentation layer can animate them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Record describing the transfer.
    pub record: MoveRecord,
    /// Ids of the moved items, in the order they now sit on the destination.
    pub items: SmallVec<[ItemId; CAPACITY]>,
}

/// Decide whether moving the top group of `from` onto `to` is legal.
///
/// Returns the group length on success. This is the single legality
/// predicate; [`try_move`] and the stuck scan both consult it, so they can
/// never disagree.
pub(crate) fn check_move(board: &Board, from: usize, to: usize) -> Result<usize, MoveError> {
    if from >= board.stack_count() {
        return Err(MoveError::NoSuchStack(from));
    }
    if to >= board.stack_count() {
        return Err(MoveError::NoSuchStack(to));
    }
    if from == to {
        return Err(MoveError::SameStack);
    }

    let group = board[from].top_group();
    if group.is_empty() {
        return Err(MoveError::EmptySource);
    }

    let dest = &board[to];
    if dest.len() + group.len() > CAPACITY {
        return Err(MoveError::CapacityExceeded);
    }
    match dest.top() {
        Some(top) if top.kind != group[0].kind => Err(MoveError::KindMismatch),
        _ => Ok(group.len()),
    }
}

/// Attempt to move the top group of `from` onto `to`.
///
/// On success the group is removed from the source and prepended to the
/// destination with its order preserved. On failure the board is unchanged
/// and the rejection reason is returned.
pub fn try_move(board: &mut Board, from: usize, to: usize) -> Result<MoveOutcome, MoveError> {
    let moved = check_move(board, from, to)?;

    let group = board.stack_mut(from).take_top(moved);
    let items: SmallVec<[ItemId; CAPACITY]> = group.iter().map(|item| item.id).collect();
    board.stack_mut(to).place_top(&group);

    Ok(MoveOutcome {
        record: MoveRecord { from, to, moved },
        items,
    })
}

/// Reverse a recorded move: take `record.moved` items off the top of
/// `record.to` and put them back on top of `record.from`.
///
/// Undo is authoritative - no legality re-check. The record must come from
/// this board's history; a fabricated record panics rather than corrupting
/// the board.
///
/// Returns the ids of the items that traveled back, top first.
pub fn undo_move(board: &mut Board, record: &MoveRecord) -> SmallVec<[ItemId; CAPACITY]> {
    debug_assert!(record.to < board.stack_count());
    debug_assert!(record.from < board.stack_count());
    debug_assert!(record.moved <= board[record.to].len());

    let group = board.stack_mut(record.to).take_top(record.moved);
    let items: SmallVec<[ItemId; CAPACITY]> = group.iter().map(|item| item.id).collect();
    board.stack_mut(record.from).place_top(&group);
    items
}
