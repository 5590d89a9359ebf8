//! Move records and the undo history.
//!
//! Every accepted move appends a [`MoveRecord`]; undo pops the most recent
//! one and replays it backwards. The history is an `im::Vector`, so cloning
//! a session (for snapshots or speculative play) shares structure instead
//! of copying the whole log.

use im::Vector;
use serde::{Deserialize, Serialize};

/// One accepted move: which stacks, and how many items went across.
///
/// Enough to reverse the move exactly; item ids are not stored because the
/// moved items are always the top `moved` of the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Source stack index.
    pub from: usize,
    /// Destination stack index.
    pub to: usize,
    /// Number of items transferred.
    pub moved: usize,
}

/// Ordered log of accepted moves, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vector<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<MoveRecord> {
        self.records.last().copied()
    }

    /// Append an accepted move.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push_back(record);
    }

    /// Pop the most recent move.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop_back()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate records oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: usize, to: usize, moved: usize) -> MoveRecord {
        MoveRecord { from, to, moved }
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut history = MoveHistory::new();
        history.push(record(0, 1, 2));
        history.push(record(1, 2, 1));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop(), Some(record(1, 2, 1)));
        assert_eq!(history.pop(), Some(record(0, 1, 2)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_last_does_not_remove() {
        let mut history = MoveHistory::new();
        history.push(record(0, 1, 1));

        assert_eq!(history.last(), Some(record(0, 1, 1)));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::new();
        history.push(record(0, 1, 1));
        history.push(record(2, 3, 4));
        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn test_clone_shares_no_mutations() {
        let mut history = MoveHistory::new();
        history.push(record(0, 1, 1));

        let snapshot = history.clone();
        history.push(record(1, 0, 1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_iter_oldest_first() {
        let mut history = MoveHistory::new();
        history.push(record(0, 1, 1));
        history.push(record(1, 2, 2));

        let froms: Vec<usize> = history.iter().map(|r| r.from).collect();
        assert_eq!(froms, vec![0, 1]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut history = MoveHistory::new();
        history.push(record(3, 4, 2));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
