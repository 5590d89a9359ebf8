//! Exhaustive solvability search.
//!
//! A depth-first search over board states with a visited set, used to verify
//! that generated puzzles can actually be finished. States are deduplicated
//! up to stack order, since permuting whole stacks never changes which moves
//! are available.
//!
//! The search is exhaustive and exponential in the worst case. It is meant
//! for generator verification and tests on ordinary puzzle sizes, not for
//! hinting inside a hot loop.
//!
//! ```
//! use stacksort::board::{Board, Stack};
//! use stacksort::core::{Item, ItemId, KindId};
//! use stacksort::evaluator::solve;
//!
//! let kind = KindId::new(0);
//! let half = |base: u32| {
//!     Stack::from_items([
//!         Item::new(ItemId::new(base), kind),
//!         Item::new(ItemId::new(base + 1), kind),
//!     ])
//! };
//! let board = Board::from_stacks(vec![half(0), half(2), Stack::new()]);
//!
//! let path = solve(&board).expect("two half stacks merge in one move");
//! assert_eq!(path.len(), 1);
//! ```

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::engine::{self, MoveRecord};

use super::status::is_complete;

/// One explored state in the search arena.
///
/// Nodes are stored in a flat vector and referenced by index, with a parent
/// link for reconstructing the move path once a solved state is found.
struct SearchNode {
    board: Board,
    parent: Option<(usize, MoveRecord)>,
}

/// Find a sequence of legal moves that sorts the board, if one exists.
///
/// Returns the moves in play order. An already-complete board yields an
/// empty path. `None` means the search exhausted every reachable state
/// without finding a sorted one.
#[must_use]
pub fn solve(board: &Board) -> Option<Vec<MoveRecord>> {
    let mut nodes: Vec<SearchNode> = Vec::with_capacity(1024);
    let mut visited: FxHashSet<Vec<Vec<u8>>> = FxHashSet::default();
    let mut frontier: Vec<usize> = Vec::new();

    nodes.push(SearchNode {
        board: board.clone(),
        parent: None,
    });
    visited.insert(canonical_key(board));
    frontier.push(0);

    while let Some(node_id) = frontier.pop() {
        if is_complete(&nodes[node_id].board) {
            return Some(reconstruct_path(&nodes, node_id));
        }

        let stack_count = nodes[node_id].board.stack_count();
        for from in 0..stack_count {
            if skip_as_source(&nodes[node_id].board, from) {
                continue;
            }
            for to in 0..stack_count {
                if engine::check_move(&nodes[node_id].board, from, to).is_err() {
                    continue;
                }

                let mut next = nodes[node_id].board.clone();
                let outcome = engine::try_move(&mut next, from, to)
                    .expect("checked move must apply");

                if !visited.insert(canonical_key(&next)) {
                    continue;
                }

                let child_id = nodes.len();
                nodes.push(SearchNode {
                    board: next,
                    parent: Some((node_id, outcome.record)),
                });
                frontier.push(child_id);
            }
        }
    }

    None
}

/// Whether any sequence of legal moves sorts the board.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    solve(board).is_some()
}

/// A full single-kind stack is finished; unpacking it never helps.
fn skip_as_source(board: &Board, index: usize) -> bool {
    let stack = &board[index];
    stack.is_empty() || (stack.is_full() && stack.is_single_kind())
}

/// Kind sequences per stack, sorted across stacks. Item identities and
/// stack positions do not affect solvability.
fn canonical_key(board: &Board) -> Vec<Vec<u8>> {
    let mut key: Vec<Vec<u8>> = board
        .stacks()
        .iter()
        .map(|stack| stack.items().iter().map(|item| item.kind.raw()).collect())
        .collect();
    key.sort();
    key
}

fn reconstruct_path(nodes: &[SearchNode], goal: usize) -> Vec<MoveRecord> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some((parent, record)) = nodes[current].parent {
        path.push(record);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stack;
    use crate::core::{Item, ItemId, KindId};

    fn item(id: u32, kind: u8) -> Item {
        Item::new(ItemId::new(id), KindId::new(kind))
    }

    fn replay(mut board: Board, path: &[MoveRecord]) -> Board {
        for record in path {
            engine::try_move(&mut board, record.from, record.to).unwrap();
        }
        board
    }

    #[test]
    fn test_solved_board_has_empty_path() {
        let board = Board::from_stacks(vec![
            Stack::from_items([item(0, 0), item(1, 0), item(2, 0), item(3, 0)]),
            Stack::new(),
        ]);

        assert_eq!(solve(&board), Some(Vec::new()));
    }

    #[test]
    fn test_one_merge_solution() {
        let board = Board::from_stacks(vec![
            Stack::from_items([item(0, 0), item(1, 0)]),
            Stack::from_items([item(2, 0), item(3, 0)]),
            Stack::new(),
        ]);

        let path = solve(&board).unwrap();
        assert_eq!(path.len(), 1);
        assert!(is_complete(&replay(board, &path)));
    }

    #[test]
    fn test_interleaved_pair_solvable() {
        // Two kinds alternating in two stacks, one empty to work with
        let board = Board::from_stacks(vec![
            Stack::from_items([item(0, 0), item(1, 1), item(2, 0), item(3, 1)]),
            Stack::from_items([item(4, 1), item(5, 0), item(6, 1), item(7, 0)]),
            Stack::new(),
            Stack::new(),
        ]);

        let path = solve(&board).unwrap();
        assert!(is_complete(&replay(board, &path)));
    }

    #[test]
    fn test_dead_position_is_unsolvable() {
        // No empty stack, every top pair mismatches or overflows
        let board = Board::from_stacks(vec![
            Stack::from_items([item(0, 0), item(1, 0), item(2, 2)]),
            Stack::from_items([item(3, 0), item(4, 0), item(5, 2)]),
            Stack::from_items([item(6, 1), item(7, 1), item(8, 3)]),
            Stack::from_items([item(9, 1), item(10, 1), item(11, 3)]),
            Stack::from_items([item(12, 2), item(13, 2)]),
            Stack::from_items([item(14, 3), item(15, 3)]),
        ]);

        assert_eq!(solve(&board), None);
    }

    #[test]
    fn test_single_kind_needs_no_empty_stack() {
        let board = Board::from_stacks(vec![
            Stack::from_items([item(0, 0), item(1, 0), item(2, 0)]),
            Stack::from_items([item(3, 0)]),
        ]);

        let path = solve(&board).unwrap();
        assert!(is_complete(&replay(board, &path)));
    }
}
