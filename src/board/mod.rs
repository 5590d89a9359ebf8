//! Board structure: stacks of items and the board that holds them.

pub mod board;
pub mod stack;

pub use board::Board;
pub use stack::Stack;
