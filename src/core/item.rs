//! Item identification.
//!
//! Every sortable unit on the board is an `Item`: a unique `ItemId` plus a
//! reference to the `KindId` it belongs to. Items are immutable once created;
//! the generator allocates their ids sequentially per board.
//!
//! ## Usage
//!
//! ```
//! use stacksort::core::{Item, ItemId, KindId};
//!
//! let item = Item::new(ItemId::new(7), KindId::new(2));
//!
//! assert_eq!(item.id.raw(), 7);
//! assert_eq!(item.kind, KindId::new(2));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for an item kind (the category items are sorted by).
///
/// The engine doesn't interpret kind ids - display metadata lives in the
/// catalog. Kind ids only need to be comparable for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KindId(pub u8);

impl KindId {
    /// Create a new kind ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl From<u8> for KindId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for KindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Unique identifier for a single item on a board.
///
/// Ids are unique within one board; the presentation layer uses them to
/// track individual items across moves for animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// One sortable unit: a unique id tagged with the kind it belongs to.
///
/// Plain `Copy` value; moves shuffle items between stacks but never alter
/// or recreate them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the board.
    pub id: ItemId,
    /// The kind this item sorts into.
    pub kind: KindId,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub const fn new(id: ItemId, kind: KindId) -> Self {
        Self { id, kind }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({} of {})", self.id.0, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_id() {
        let id = KindId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Kind(5)");
    }

    #[test]
    fn test_item_id() {
        let id = ItemId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Item(42)");
    }

    #[test]
    fn test_item_construction() {
        let item = Item::new(ItemId::new(3), KindId::new(1));
        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.kind, KindId::new(1));
    }

    #[test]
    fn test_kind_ordering() {
        assert!(KindId::new(1) < KindId::new(2));
        assert!(KindId::new(9) > KindId::new(0));
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(KindId::from(7), KindId::new(7));
        assert_eq!(ItemId::from(7), ItemId::new(7));
    }

    #[test]
    fn test_serialization() {
        let item = Item::new(ItemId::new(123), KindId::new(4));
        let json = serde_json::to_string(&item).unwrap();
        let deserialized: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
