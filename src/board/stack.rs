//! A single stack of items.
//!
//! Stacks are ordered with **top = index 0**: the item nearest the opening
//! comes first, so `items()[0]` is what a move would pick up. A stack never
//! holds more than [`CAPACITY`] items; the constructors and internal
//! mutators enforce that invariant.
//!
//! ## Usage
//!
//! ```
//! use stacksort::board::Stack;
//! use stacksort::core::{Item, ItemId, KindId};
//!
//! let stack = Stack::from_items([
//!     Item::new(ItemId::new(0), KindId::new(1)),
//!     Item::new(ItemId::new(1), KindId::new(1)),
//!     Item::new(ItemId::new(2), KindId::new(2)),
//! ]);
//!
//! // The top two items share a kind, so they form the movable group
//! assert_eq!(stack.top().unwrap().kind, KindId::new(1));
//! assert_eq!(stack.top_group().len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Item, CAPACITY};

/// An ordered column of items, top = index 0.
///
/// Length never exceeds [`CAPACITY`]. All mutation goes through the move
/// engine and generator; callers outside the crate construct stacks whole
/// and read them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    items: SmallVec<[Item; CAPACITY]>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack from items, top first.
    ///
    /// Panics if given more than [`CAPACITY`] items.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items: SmallVec<[Item; CAPACITY]> = items.into_iter().collect();
        assert!(
            items.len() <= CAPACITY,
            "Stack over capacity: {} items, capacity {}",
            items.len(),
            CAPACITY
        );
        Self { items }
    }

    /// Number of items in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the stack is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == CAPACITY
    }

    /// The top item, if any.
    #[must_use]
    pub fn top(&self) -> Option<Item> {
        self.items.first().copied()
    }

    /// All items, top first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The maximal same-kind run at the top of the stack.
    ///
    /// This is the group a move transfers atomically. Empty stack yields an
    /// empty group.
    #[must_use]
    pub fn top_group(&self) -> &[Item] {
        match self.items.first() {
            Some(first) => {
                let end = self
                    .items
                    .iter()
                    .take_while(|item| item.kind == first.kind)
                    .count();
                &self.items[..end]
            }
            None => &[],
        }
    }

    /// True if every item shares one kind. Vacuously true when empty.
    #[must_use]
    pub fn is_single_kind(&self) -> bool {
        self.items.windows(2).all(|pair| pair[0].kind == pair[1].kind)
    }

    /// Append an item at the bottom. Used while dealing a fresh board.
    pub(crate) fn push_bottom(&mut self, item: Item) {
        assert!(
            self.items.len() < CAPACITY,
            "Stack over capacity: push onto a full stack"
        );
        self.items.push(item);
    }

    /// Remove `count` items from the top, returned top first.
    pub(crate) fn take_top(&mut self, count: usize) -> SmallVec<[Item; CAPACITY]> {
        debug_assert!(count <= self.items.len());
        self.items.drain(..count).collect()
    }

    /// Insert a group at the top, preserving its order.
    pub(crate) fn place_top(&mut self, group: &[Item]) {
        assert!(
            self.items.len() + group.len() <= CAPACITY,
            "Stack over capacity: {} + {} items, capacity {}",
            self.items.len(),
            group.len(),
            CAPACITY
        );
        self.items.insert_from_slice(0, group);
    }

    /// Mutable view for the scramble steps. Length cannot change through it.
    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }
}
