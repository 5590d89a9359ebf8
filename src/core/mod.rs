//! Core engine types: items, kind ids, RNG, difficulty configuration.
//!
//! This module contains the fundamental building blocks shared by every
//! other part of the engine. Nothing here knows about boards or moves.

pub mod config;
pub mod item;
pub mod rng;

pub use config::{Difficulty, DifficultyProfile, CAPACITY};
pub use item::{Item, ItemId, KindId};
pub use rng::{PuzzleRng, PuzzleRngState};
