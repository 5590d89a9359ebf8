//! # stacksort
//!
//! A sort-into-groups stacking puzzle engine: solvable board generation,
//! move legality, undo, and win/stuck detection.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The same seed and difficulty always produce the same
//!    puzzle. All randomness flows through one seeded RNG.
//!
//! 2. **Conservation-Checked**: Generated boards are validated after assembly
//!    (stack counts, per-kind item counts, capacity) with bounded retries, so
//!    a bug in any scramble step surfaces as an error instead of an
//!    unsolvable board.
//!
//! 3. **One Legality Predicate**: The mover and the stuck detector share the
//!    same check, so "this move is legal" and "a legal move exists" can
//!    never disagree.
//!
//! ## Architecture
//!
//! - **Top At Index Zero**: Stacks store their items top-first. Moves take
//!   the top run of one kind and prepend it to the destination, preserving
//!   order.
//!
//! - **Persistent History**: Undo history uses `im::Vector`, so cloning a
//!   session for search or speculative play is O(1).
//!
//! - **Inline Stacks**: Each stack is a `SmallVec` sized to the stack
//!   capacity, so boards never heap-allocate per stack.
//!
//! ## Modules
//!
//! - `core`: Item and kind IDs, difficulty profiles, RNG, capacity
//! - `catalog`: Kind definitions and the registry puzzles draw from
//! - `board`: Stacks and the board that holds them
//! - `generator`: Seeded, validated puzzle generation
//! - `engine`: Move legality, application, and undo
//! - `evaluator`: Complete/stuck detection and board status
//! - `session`: One running puzzle with clicks, undo, reset
//! - `error`: Error types for moves, undo, and generation

pub mod core;
pub mod catalog;
pub mod board;
pub mod generator;
pub mod engine;
pub mod evaluator;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, DifficultyProfile, CAPACITY,
    Item, ItemId, KindId,
    PuzzleRng, PuzzleRngState,
};

pub use crate::catalog::{KindCatalog, KindDef};

pub use crate::board::{Board, Stack};

pub use crate::generator::{generate, MAX_GENERATION_ATTEMPTS};

pub use crate::engine::{try_move, undo_move, MoveHistory, MoveOutcome, MoveRecord};

pub use crate::evaluator::{
    evaluate, has_any_legal_move, is_complete, is_solvable, solve, BoardStatus,
};

pub use crate::session::{ClickOutcome, MoveApplied, Session, UndoApplied};

pub use crate::error::{GenerateError, MoveError, UndoError};
