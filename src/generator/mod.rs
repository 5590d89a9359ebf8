//! Puzzle generator: solvable-by-construction boards from a difficulty
//! profile and a seeded RNG.

pub mod generate;
mod scramble;

pub use generate::{generate, MAX_GENERATION_ATTEMPTS};
