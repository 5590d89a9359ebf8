//! Board generation.
//!
//! A fresh board is a scramble of an already-sorted arrangement: the
//! generator instantiates every item, permutes and relocates them, and
//! never discards or duplicates one. Solvability follows by construction,
//! because a pure permutation of a sorted board can be sorted again.
//!
//! ## Pipeline
//!
//! 1. Instantiate `CAPACITY` items per selected kind
//! 2. Shuffle all items uniformly
//! 3. Seed a few same-kind clusters (more on easier tiers)
//! 4. Deal round-robin into the filled stacks, spilling overflow forward
//! 5. Append the reserved empty stacks
//! 6. Perturb per difficulty: easy sorts within stacks, harder tiers
//!    re-scramble and split any stack that came out pre-solved
//! 7. Break up adjacent same-kind runs with the profile's probability
//!
//! Afterwards the board is validated against the construction invariants.
//! A failed attempt is regenerated, a bounded number of times.

use tracing::{debug, warn};

use crate::board::{Board, Stack};
use crate::core::{DifficultyProfile, Item, ItemId, KindId, PuzzleRng, CAPACITY};
use crate::error::GenerateError;
use crate::evaluator::is_complete;

use super::scramble::{break_up_runs, perturb_stacks, seed_clusters};

/// How many times generation restarts before giving up.
pub const MAX_GENERATION_ATTEMPTS: u32 = 8;

/// Generate a solvable board for the given kinds and profile.
///
/// `kinds` must be exactly `profile.kind_count` distinct ids (the catalog's
/// [`select_kinds`](crate::catalog::KindCatalog::select_kinds) produces
/// such a set). The same seed, kinds, and profile always produce the same
/// board.
pub fn generate(
    kinds: &[KindId],
    profile: &DifficultyProfile,
    rng: &mut PuzzleRng,
) -> Result<Board, GenerateError> {
    profile.validate()?;

    if kinds.is_empty() {
        return Err(GenerateError::InvalidConfiguration(
            "no kinds selected".into(),
        ));
    }
    if kinds.len() != profile.kind_count {
        return Err(GenerateError::InvalidConfiguration(format!(
            "profile plays {} kinds but {} were selected",
            profile.kind_count,
            kinds.len()
        )));
    }
    let mut sorted = kinds.to_vec();
    sorted.sort_unstable();
    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(GenerateError::InvalidConfiguration(
            "selected kinds contain a duplicate".into(),
        ));
    }

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let board = build_board(kinds, profile, rng);
        match validate_board(&board, kinds, profile) {
            Ok(()) => {
                debug!(
                    attempt,
                    difficulty = %profile.difficulty,
                    stacks = board.stack_count(),
                    "board generated"
                );
                return Ok(board);
            }
            Err(reason) => {
                warn!(attempt, reason, "generated board failed validation; retrying");
            }
        }
    }

    Err(GenerateError::InvariantViolation {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

/// One unvalidated generation pass.
fn build_board(kinds: &[KindId], profile: &DifficultyProfile, rng: &mut PuzzleRng) -> Board {
    let mut items: Vec<Item> = Vec::with_capacity(kinds.len() * CAPACITY);
    let mut next_id = 0u32;
    for &kind in kinds {
        for _ in 0..CAPACITY {
            items.push(Item::new(ItemId::new(next_id), kind));
            next_id += 1;
        }
    }

    rng.shuffle(&mut items);

    // Round-robin dealing sends position p to stack p % filled, so clusters
    // are seeded at that stride to land as vertical runs
    let filled = profile.filled_stacks();
    seed_clusters(&mut items, profile.cluster_seeds(), filled, rng);

    let mut stacks = deal_round_robin(&items, filled);
    for _ in 0..profile.empty_stacks {
        stacks.push(Stack::new());
    }

    perturb_stacks(&mut stacks, profile, rng);
    break_up_runs(&mut stacks, profile.breakup_probability, rng);

    Board::from_stacks(stacks)
}

/// Deal items into `filled` stacks, position `p` to stack `p % filled`.
///
/// A full target sends its item to the spill pile, which afterwards tops up
/// the first stacks with room.
fn deal_round_robin(items: &[Item], filled: usize) -> Vec<Stack> {
    let mut stacks = vec![Stack::new(); filled];
    let mut spill = Vec::new();

    for (i, &item) in items.iter().enumerate() {
        let target = i % filled;
        if stacks[target].len() < CAPACITY {
            stacks[target].push_bottom(item);
        } else {
            spill.push(item);
        }
    }

    for item in spill {
        if let Some(slot) = stacks.iter_mut().find(|s| s.len() < CAPACITY) {
            slot.push_bottom(item);
        }
        // A spilled item with nowhere to go is dropped here and caught by
        // validation, which counts items per kind
    }

    stacks
}

/// Post-generation invariant checks.
///
/// The construction cannot violate these, so a failure means the
/// implementation drifted; the caller regenerates rather than shipping a
/// corrupt board.
fn validate_board(
    board: &Board,
    kinds: &[KindId],
    profile: &DifficultyProfile,
) -> Result<(), &'static str> {
    if board.stack_count() != profile.total_stacks {
        return Err("stack count does not match the profile");
    }
    if board.empty_stack_count() < profile.empty_stacks {
        return Err("reserved empty stacks were filled");
    }
    if board.stacks().iter().any(|s| s.len() > CAPACITY) {
        return Err("a stack exceeds capacity");
    }

    let counts = board.kind_counts();
    if counts.len() != kinds.len() {
        return Err("board holds a kind that was not selected");
    }
    for kind in kinds {
        if counts.get(kind).copied().unwrap_or(0) != CAPACITY {
            return Err("per-kind item count drifted");
        }
    }

    // A fresh board must leave something to do
    if kinds.len() > 1 && is_complete(board) {
        return Err("board came out already sorted");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn kind_ids(count: u8) -> Vec<KindId> {
        (0..count).map(KindId::new).collect()
    }

    fn assert_invariants(board: &Board, kinds: &[KindId], profile: &DifficultyProfile) {
        assert_eq!(board.stack_count(), profile.total_stacks);
        assert!(board.empty_stack_count() >= profile.empty_stacks);
        assert_eq!(board.total_items(), kinds.len() * CAPACITY);

        let counts = board.kind_counts();
        assert_eq!(counts.len(), kinds.len());
        for kind in kinds {
            assert_eq!(counts.get(kind), Some(&CAPACITY));
        }

        for stack in board.stacks() {
            assert!(stack.len() <= CAPACITY);
        }
    }

    #[test]
    fn test_generate_easy_invariants() {
        let profile = DifficultyProfile::easy();
        let kinds = kind_ids(4);

        for seed in 0..20 {
            let mut rng = PuzzleRng::new(seed);
            let board = generate(&kinds, &profile, &mut rng).unwrap();
            assert_invariants(&board, &kinds, &profile);
        }
    }

    #[test]
    fn test_generate_medium_and_hard_invariants() {
        for profile in [DifficultyProfile::medium(), DifficultyProfile::hard()] {
            let kinds = kind_ids(profile.kind_count as u8);
            for seed in 0..20 {
                let mut rng = PuzzleRng::new(seed);
                let board = generate(&kinds, &profile, &mut rng).unwrap();
                assert_invariants(&board, &kinds, &profile);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let profile = DifficultyProfile::medium();
        let kinds = kind_ids(6);

        let a = generate(&kinds, &profile, &mut PuzzleRng::new(99)).unwrap();
        let b = generate(&kinds, &profile, &mut PuzzleRng::new(99)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_varies_by_seed() {
        let profile = DifficultyProfile::easy();
        let kinds = kind_ids(4);

        let a = generate(&kinds, &profile, &mut PuzzleRng::new(1)).unwrap();
        let b = generate(&kinds, &profile, &mut PuzzleRng::new(2)).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn test_fresh_board_is_never_complete() {
        for seed in 0..50 {
            let profile = DifficultyProfile::easy();
            let kinds = kind_ids(4);
            let board = generate(&kinds, &profile, &mut PuzzleRng::new(seed)).unwrap();
            assert!(!is_complete(&board), "seed {} produced a solved board", seed);
        }
    }

    #[test]
    fn test_generate_rejects_empty_kinds() {
        let profile = DifficultyProfile::easy();
        let mut rng = PuzzleRng::new(1);

        // An empty selection also mismatches kind_count; either way it is a
        // configuration error, not a panic
        assert!(matches!(
            generate(&[], &profile, &mut rng),
            Err(GenerateError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_generate_rejects_kind_count_mismatch() {
        let profile = DifficultyProfile::easy(); // wants 4
        let mut rng = PuzzleRng::new(1);

        assert!(generate(&kind_ids(3), &profile, &mut rng).is_err());
        assert!(generate(&kind_ids(5), &profile, &mut rng).is_err());
    }

    #[test]
    fn test_generate_rejects_duplicate_kinds() {
        let profile = DifficultyProfile::easy();
        let mut rng = PuzzleRng::new(1);
        let kinds = vec![
            KindId::new(0),
            KindId::new(1),
            KindId::new(1),
            KindId::new(2),
        ];

        assert!(matches!(
            generate(&kinds, &profile, &mut rng),
            Err(GenerateError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_generate_rejects_invalid_profile() {
        let profile = DifficultyProfile::custom(Difficulty::Easy, 4, 4, 0, 0.1);
        let mut rng = PuzzleRng::new(1);

        assert!(generate(&kind_ids(4), &profile, &mut rng).is_err());
    }

    #[test]
    fn test_easy_without_breakup_sorts_stacks() {
        let profile = DifficultyProfile::custom(Difficulty::Easy, 4, 6, 2, 0.0);
        let kinds = kind_ids(4);

        for seed in 0..10 {
            let board = generate(&kinds, &profile, &mut PuzzleRng::new(seed)).unwrap();
            for stack in board.stacks() {
                let kinds_in_stack: Vec<u8> =
                    stack.items().iter().map(|i| i.kind.raw()).collect();
                let mut sorted = kinds_in_stack.clone();
                sorted.sort_unstable();
                assert_eq!(kinds_in_stack, sorted);
            }
        }
    }

    #[test]
    fn test_single_kind_profile_is_allowed() {
        // One kind cannot avoid being grouped; the freshness check only
        // applies beyond one kind
        let profile = DifficultyProfile::custom(Difficulty::Easy, 1, 3, 1, 0.0);
        let board = generate(&kind_ids(1), &profile, &mut PuzzleRng::new(5)).unwrap();

        assert_eq!(board.total_items(), CAPACITY);
        assert_eq!(board.stack_count(), 3);
    }

    #[test]
    fn test_sparse_custom_profile() {
        // More filled stacks than kinds: the deal leaves every filled stack
        // half empty, and the reserved empties must still stay empty
        let profile = DifficultyProfile::custom(Difficulty::Medium, 2, 6, 2, 0.3);
        let kinds = kind_ids(2);

        for seed in 0..10 {
            let board = generate(&kinds, &profile, &mut PuzzleRng::new(seed)).unwrap();
            assert_invariants(&board, &kinds, &profile);
        }
    }

    #[test]
    fn test_item_ids_are_sequential_and_unique() {
        let profile = DifficultyProfile::easy();
        let kinds = kind_ids(4);
        let board = generate(&kinds, &profile, &mut PuzzleRng::new(3)).unwrap();

        let mut ids: Vec<u32> = board
            .stacks()
            .iter()
            .flat_map(|s| s.items().iter().map(|i| i.id.raw()))
            .collect();
        ids.sort_unstable();

        let expected: Vec<u32> = (0..(kinds.len() * CAPACITY) as u32).collect();
        assert_eq!(ids, expected);
    }
}
