//! Kind definitions.
//!
//! A `KindDef` is the static identity of one sortable category: an id plus
//! the display metadata the presentation layer renders (name, glyph, color).
//! Definitions are immutable and loaded once into the catalog.

use serde::{Deserialize, Serialize};

use crate::core::KindId;

/// Static definition of an item kind.
///
/// The engine only ever compares ids; the rest is display metadata passed
/// through to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindDef {
    /// Unique identifier for this kind.
    pub id: KindId,

    /// Human-readable name.
    pub name: String,

    /// Single-character marker for text displays.
    pub glyph: char,

    /// CSS-style hex color.
    pub color: String,
}

impl KindDef {
    /// Create a new kind definition with placeholder display metadata.
    pub fn new(id: KindId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: '?',
            color: String::from("#888888"),
        }
    }

    /// Set the glyph.
    #[must_use]
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl std::fmt::Display for KindDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
