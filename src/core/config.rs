//! Difficulty configuration.
//!
//! A `DifficultyProfile` drives board generation: how many kinds are in play,
//! how many stacks the board has, how many start empty, and how aggressively
//! the scramble breaks up same-kind runs. Three presets (`easy`, `medium`,
//! `hard`) cover the shipped difficulties; `custom` profiles are validated
//! before generation.
//!
//! The engine never hardcodes board shape - everything flows from the profile.

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Maximum items per stack, and items per kind.
///
/// A kind is fully sorted when all `CAPACITY` of its items sit alone in one
/// stack. This is a global constant of the puzzle, not a tunable.
pub const CAPACITY: usize = 4;

/// Difficulty tier.
///
/// Besides selecting a preset profile, the tier steers two generation
/// details: how many same-kind clusters are seeded into the shuffle, and
/// whether filled stacks are sorted (`Easy`) or re-scrambled (the rest).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The preset profile for this tier.
    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::easy(),
            Difficulty::Medium => DifficultyProfile::medium(),
            Difficulty::Hard => DifficultyProfile::hard(),
        }
    }

    /// Lowercase label (for logs and display).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Generation parameters for one difficulty.
///
/// ## Example
///
/// ```
/// use stacksort::core::DifficultyProfile;
///
/// let profile = DifficultyProfile::medium();
/// assert_eq!(profile.kind_count, 6);
/// assert_eq!(profile.filled_stacks(), 6);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Tier this profile belongs to.
    pub difficulty: Difficulty,

    /// Number of distinct kinds in play.
    pub kind_count: usize,

    /// Total stacks on the board, filled and empty.
    pub total_stacks: usize,

    /// How many stacks start empty (reserved maneuvering space).
    pub empty_stacks: usize,

    /// Per adjacent same-kind pair, the chance the scramble splits it.
    pub breakup_probability: f64,
}

impl DifficultyProfile {
    /// Preset: 4 kinds, 6 stacks, 2 empty, gentle scramble.
    #[must_use]
    pub const fn easy() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            kind_count: 4,
            total_stacks: 6,
            empty_stacks: 2,
            breakup_probability: 0.1,
        }
    }

    /// Preset: 6 kinds, 8 stacks, 2 empty.
    #[must_use]
    pub const fn medium() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            kind_count: 6,
            total_stacks: 8,
            empty_stacks: 2,
            breakup_probability: 0.3,
        }
    }

    /// Preset: 8 kinds, 10 stacks, 2 empty, heavy scramble.
    #[must_use]
    pub const fn hard() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            kind_count: 8,
            total_stacks: 10,
            empty_stacks: 2,
            breakup_probability: 0.5,
        }
    }

    /// Build a non-preset profile. Call [`validate`](Self::validate) before
    /// handing it to the generator.
    #[must_use]
    pub const fn custom(
        difficulty: Difficulty,
        kind_count: usize,
        total_stacks: usize,
        empty_stacks: usize,
        breakup_probability: f64,
    ) -> Self {
        Self {
            difficulty,
            kind_count,
            total_stacks,
            empty_stacks,
            breakup_probability,
        }
    }

    /// Number of stacks that receive items during generation.
    #[must_use]
    pub const fn filled_stacks(&self) -> usize {
        self.total_stacks.saturating_sub(self.empty_stacks)
    }

    /// How many same-kind clusters the generator seeds into the shuffle.
    ///
    /// More clusters bias toward a friendlier opening.
    #[must_use]
    pub(crate) const fn cluster_seeds(&self) -> usize {
        match self.difficulty {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Check the profile describes a board the generator can build.
    ///
    /// Rules:
    /// - at least one kind in play
    /// - at least one empty stack (without maneuvering space the solvability
    ///   guarantee does not hold)
    /// - at least one filled stack
    /// - enough filled stacks to hold every item (`filled_stacks >= kind_count`)
    /// - `breakup_probability` within `[0.0, 1.0]`
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.kind_count == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "profile requires at least one kind".into(),
            ));
        }
        if self.empty_stacks == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "profile requires at least one empty stack".into(),
            ));
        }
        if self.total_stacks <= self.empty_stacks {
            return Err(GenerateError::InvalidConfiguration(format!(
                "profile has no filled stacks ({} total, {} empty)",
                self.total_stacks, self.empty_stacks
            )));
        }
        if self.filled_stacks() < self.kind_count {
            return Err(GenerateError::InvalidConfiguration(format!(
                "{} kinds do not fit in {} filled stacks",
                self.kind_count,
                self.filled_stacks()
            )));
        }
        if !(0.0..=1.0).contains(&self.breakup_probability) {
            return Err(GenerateError::InvalidConfiguration(format!(
                "breakup probability {} outside [0, 1]",
                self.breakup_probability
            )));
        }
        Ok(())
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::easy()
    }
}
