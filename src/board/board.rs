//! The board: an ordered sequence of stacks.
//!
//! A board is a plain value. Cloning it clones every stack (stacks are
//! inline `SmallVec`s, so this is a flat memcpy-sized copy), which keeps
//! snapshots for the presentation layer cheap. Mutation happens only
//! through the move engine and generator.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::KindId;

use super::stack::Stack;

/// An ordered sequence of stacks.
///
/// Invariant: across the whole board each kind has at most
/// [`CAPACITY`](crate::core::CAPACITY) items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    stacks: Vec<Stack>,
}

impl Board {
    /// Create a board from stacks.
    #[must_use]
    pub fn from_stacks(stacks: Vec<Stack>) -> Self {
        Self { stacks }
    }

    /// Number of stacks, filled and empty.
    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// All stacks in order.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Get a stack by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Stack> {
        self.stacks.get(index)
    }

    /// Mutable access for the move engine and generator.
    pub(crate) fn stack_mut(&mut self, index: usize) -> &mut Stack {
        &mut self.stacks[index]
    }

    /// Total items across all stacks.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// How many stacks are currently empty.
    #[must_use]
    pub fn empty_stack_count(&self) -> usize {
        self.stacks.iter().filter(|s| s.is_empty()).count()
    }

    /// Item count per kind across the whole board.
    #[must_use]
    pub fn kind_counts(&self) -> FxHashMap<KindId, usize> {
        let mut counts = FxHashMap::default();
        for stack in &self.stacks {
            for item in stack.items() {
                *counts.entry(item.kind).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Distinct kinds present, sorted by id.
    #[must_use]
    pub fn kinds_in_play(&self) -> Vec<KindId> {
        let mut kinds: Vec<KindId> = self
            .stacks
            .iter()
            .flat_map(|s| s.items().iter().map(|item| item.kind))
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        kinds
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Stack;

    fn index(&self, index: usize) -> &Stack {
        &self.stacks[index]
    }
}
