//! Kind catalog: the fixed pool kinds are drawn from.
//!
//! The `KindCatalog` stores all kind definitions and hands the generator a
//! uniform random selection of them per game. Registration order is
//! preserved so selection is deterministic under a fixed seed.

use rustc_hash::FxHashMap;

use crate::core::{DifficultyProfile, KindId, PuzzleRng};
use crate::error::GenerateError;

use super::kind::KindDef;

/// Registry of kind definitions.
///
/// ## Example
///
/// ```
/// use stacksort::catalog::{KindCatalog, KindDef};
/// use stacksort::core::KindId;
///
/// let mut catalog = KindCatalog::new();
/// catalog.register(
///     KindDef::new(KindId::new(1), "Crimson")
///         .with_glyph('C')
///         .with_color("#e63946"),
/// );
///
/// let found = catalog.get(KindId::new(1)).unwrap();
/// assert_eq!(found.name, "Crimson");
/// ```
#[derive(Clone, Debug, Default)]
pub struct KindCatalog {
    kinds: Vec<KindDef>,
    index: FxHashMap<KindId, usize>,
}

impl KindCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in pool of twelve kinds.
    ///
    /// Large enough to cover every preset profile (hard plays 8 kinds).
    #[must_use]
    pub fn builtin() -> Self {
        const POOL: [(&str, char, &str); 12] = [
            ("Crimson", 'C', "#e63946"),
            ("Amber", 'A', "#f4a261"),
            ("Gold", 'G', "#e9c46a"),
            ("Lime", 'L', "#a7c957"),
            ("Teal", 'T', "#2a9d8f"),
            ("Sky", 'S', "#8ecae6"),
            ("Indigo", 'I', "#3a0ca3"),
            ("Violet", 'V', "#7209b7"),
            ("Magenta", 'M', "#b5179e"),
            ("Rose", 'R', "#ff70a6"),
            ("Pine", 'P', "#2d6a4f"),
            ("Denim", 'D', "#457b9d"),
        ];

        let mut catalog = Self::new();
        for (i, (name, glyph, color)) in POOL.iter().enumerate() {
            catalog.register(
                KindDef::new(KindId::new(i as u8), *name)
                    .with_glyph(*glyph)
                    .with_color(*color),
            );
        }
        catalog
    }

    /// Register a kind definition.
    ///
    /// Panics if a kind with the same ID already exists.
    pub fn register(&mut self, kind: KindDef) {
        if self.index.contains_key(&kind.id) {
            panic!("Kind with ID {:?} already registered", kind.id);
        }
        self.index.insert(kind.id, self.kinds.len());
        self.kinds.push(kind);
    }

    /// Get a kind definition by ID.
    #[must_use]
    pub fn get(&self, id: KindId) -> Option<&KindDef> {
        self.index.get(&id).map(|&i| &self.kinds[i])
    }

    /// Check if a kind ID is registered.
    #[must_use]
    pub fn contains(&self, id: KindId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterate over all kind definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &KindDef> {
        self.kinds.iter()
    }

    /// Choose `profile.kind_count` distinct kinds uniformly at random,
    /// without replacement.
    ///
    /// Fails with `InvalidConfiguration` if the pool is empty or smaller
    /// than the profile asks for.
    pub fn select_kinds(
        &self,
        profile: &DifficultyProfile,
        rng: &mut PuzzleRng,
    ) -> Result<Vec<KindId>, GenerateError> {
        if self.is_empty() {
            return Err(GenerateError::InvalidConfiguration(
                "kind pool is empty".into(),
            ));
        }
        if profile.kind_count > self.len() {
            return Err(GenerateError::InvalidConfiguration(format!(
                "profile plays {} kinds but the pool holds {}",
                profile.kind_count,
                self.len()
            )));
        }

        let mut ids: Vec<KindId> = self.kinds.iter().map(|k| k.id).collect();
        rng.shuffle(&mut ids);
        ids.truncate(profile.kind_count);
        Ok(ids)
    }
}
