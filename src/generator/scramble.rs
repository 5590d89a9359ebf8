//! Scramble steps: cluster seeding, difficulty perturbation, run breakup.
//!
//! Every function here is a pure permutation of the items it is given.
//! Nothing is created, dropped, or re-kinded, and stack lengths never
//! change after dealing, which is what keeps generated boards solvable.

use crate::board::Stack;
use crate::core::{Difficulty, DifficultyProfile, Item, PuzzleRng};

/// Seed `clusters` same-kind runs into the shuffled item sequence.
///
/// Dealing sends position `p` to stack `p % stride`, so a run in one stack
/// means same-kind items at positions `stride` apart. Each cluster picks a
/// random anchor, then pulls 1-3 more items of the anchor's kind into the
/// slots below it by swapping.
pub(crate) fn seed_clusters(
    items: &mut [Item],
    clusters: usize,
    stride: usize,
    rng: &mut PuzzleRng,
) {
    if items.is_empty() || stride == 0 {
        return;
    }

    for _ in 0..clusters {
        let anchor = rng.gen_range_usize(0..items.len());
        let kind = items[anchor].kind;
        let size = rng.gen_range_usize(2..crate::core::CAPACITY + 1);

        let mut column = vec![anchor];
        let mut pos = anchor;
        for _ in 1..size {
            pos += stride;
            if pos >= items.len() {
                break;
            }
            column.push(pos);
        }

        for i in 1..column.len() {
            let slot = column[i];
            if items[slot].kind == kind {
                continue;
            }
            let candidates: Vec<usize> = (0..items.len())
                .filter(|&j| items[j].kind == kind && !column.contains(&j))
                .collect();
            match rng.choose(&candidates) {
                Some(&j) => items.swap(slot, j),
                None => break,
            }
        }
    }
}

/// Difficulty-specific perturbation after dealing.
///
/// Easy sorts every stack by kind id so groupings are visible from the
/// start. Harder tiers re-scramble each stack's internal order instead,
/// and if a stack still comes out monolithic (one full kind), one of its
/// items is swapped into another stack so no stack starts pre-solved.
pub(crate) fn perturb_stacks(
    stacks: &mut [Stack],
    profile: &DifficultyProfile,
    rng: &mut PuzzleRng,
) {
    if profile.difficulty == Difficulty::Easy {
        for stack in stacks.iter_mut() {
            stack.items_mut().sort_by_key(|item| item.kind);
        }
        return;
    }

    for stack in stacks.iter_mut() {
        rng.shuffle(stack.items_mut());
    }

    for index in 0..stacks.len() {
        if stacks[index].is_full() && stacks[index].is_single_kind() {
            let slot = rng.gen_range_usize(0..stacks[index].len());
            swap_with_other(stacks, index, slot, rng);
        }
    }
}

/// Scan every stack for adjacent same-kind pairs and, with the given
/// probability per pair, swap the deeper one into a random other stack.
///
/// The swap partner is chosen without re-checking for new adjacencies, so
/// a run can occasionally reappear elsewhere. That only changes how
/// pre-sorted the opening looks, not solvability.
pub(crate) fn break_up_runs(stacks: &mut [Stack], probability: f64, rng: &mut PuzzleRng) {
    for index in 0..stacks.len() {
        let mut slot = 0;
        while slot + 1 < stacks[index].len() {
            let pair = &stacks[index].items()[slot..=slot + 1];
            if pair[0].kind == pair[1].kind && rng.gen_bool(probability) {
                swap_with_other(stacks, index, slot + 1, rng);
            }
            slot += 1;
        }
    }
}

/// Swap `stacks[index][slot]` with a uniformly chosen item in a random
/// other non-empty stack. Returns false (and leaves everything untouched)
/// when no other stack has items.
fn swap_with_other(stacks: &mut [Stack], index: usize, slot: usize, rng: &mut PuzzleRng) -> bool {
    let candidates: Vec<usize> = (0..stacks.len())
        .filter(|&j| j != index && !stacks[j].is_empty())
        .collect();
    let other = match rng.choose(&candidates) {
        Some(&j) => j,
        None => return false,
    };
    let other_slot = rng.gen_range_usize(0..stacks[other].len());

    let a = stacks[index].items()[slot];
    let b = stacks[other].items()[other_slot];
    stacks[index].items_mut()[slot] = b;
    stacks[other].items_mut()[other_slot] = a;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ItemId, KindId, CAPACITY};

    fn item(id: u32, kind: u8) -> Item {
        Item::new(ItemId::new(id), KindId::new(kind))
    }

    /// Four kinds, four items each, ids 0..16, laid out kind by kind.
    fn sorted_items() -> Vec<Item> {
        let mut items = Vec::new();
        for kind in 0..4u8 {
            for i in 0..4u32 {
                items.push(item(kind as u32 * 4 + i, kind));
            }
        }
        items
    }

    fn multiset(items: &[Item]) -> Vec<(u32, u8)> {
        let mut pairs: Vec<(u32, u8)> = items
            .iter()
            .map(|i| (i.id.raw(), i.kind.raw()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    fn stacks_multiset(stacks: &[Stack]) -> Vec<(u32, u8)> {
        let flat: Vec<Item> = stacks.iter().flat_map(|s| s.items().to_vec()).collect();
        multiset(&flat)
    }

    #[test]
    fn test_seed_clusters_preserves_items() {
        let mut items = sorted_items();
        let before = multiset(&items);

        let mut rng = PuzzleRng::new(42);
        rng.shuffle(&mut items);
        seed_clusters(&mut items, 3, 4, &mut rng);

        assert_eq!(multiset(&items), before);
    }

    #[test]
    fn test_seed_clusters_is_deterministic() {
        let mut a = sorted_items();
        let mut b = sorted_items();

        seed_clusters(&mut a, 2, 4, &mut PuzzleRng::new(7));
        seed_clusters(&mut b, 2, 4, &mut PuzzleRng::new(7));

        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_clusters_handles_degenerate_input() {
        let mut empty: Vec<Item> = Vec::new();
        seed_clusters(&mut empty, 3, 4, &mut PuzzleRng::new(1));
        assert!(empty.is_empty());

        let mut one = vec![item(0, 0)];
        seed_clusters(&mut one, 3, 4, &mut PuzzleRng::new(1));
        assert_eq!(one.len(), 1);
    }

    fn dealt_stacks(seed: u64) -> Vec<Stack> {
        // Mirror the dealing the generator performs: 16 shuffled items into
        // 4 stacks of 4
        let mut items = sorted_items();
        PuzzleRng::new(seed).shuffle(&mut items);

        let mut stacks = vec![Stack::new(); 4];
        for (i, &it) in items.iter().enumerate() {
            stacks[i % 4].push_bottom(it);
        }
        stacks.push(Stack::new());
        stacks.push(Stack::new());
        stacks
    }

    #[test]
    fn test_easy_perturbation_sorts_each_stack() {
        let mut stacks = dealt_stacks(11);
        let before = stacks_multiset(&stacks);

        let profile = DifficultyProfile::easy();
        perturb_stacks(&mut stacks, &profile, &mut PuzzleRng::new(11));

        assert_eq!(stacks_multiset(&stacks), before);
        for stack in &stacks {
            let kinds: Vec<u8> = stack.items().iter().map(|i| i.kind.raw()).collect();
            let mut sorted = kinds.clone();
            sorted.sort_unstable();
            assert_eq!(kinds, sorted);
        }
    }

    #[test]
    fn test_hard_perturbation_preserves_items_and_lengths() {
        let mut stacks = dealt_stacks(23);
        let before = stacks_multiset(&stacks);
        let lengths: Vec<usize> = stacks.iter().map(Stack::len).collect();

        let profile = DifficultyProfile::hard();
        perturb_stacks(&mut stacks, &profile, &mut PuzzleRng::new(23));

        assert_eq!(stacks_multiset(&stacks), before);
        let after: Vec<usize> = stacks.iter().map(Stack::len).collect();
        assert_eq!(after, lengths);
    }

    #[test]
    fn test_monolithic_stack_gets_split() {
        // Stack 0 is a full single kind; stack 1 holds only other kinds, so
        // the swap must break the monolith
        let mut stacks = vec![
            Stack::from_items((0..4).map(|i| item(i, 0))),
            Stack::from_items((4..8).map(|i| item(i, 1))),
        ];

        let profile = DifficultyProfile::medium();
        perturb_stacks(&mut stacks, &profile, &mut PuzzleRng::new(5));

        assert!(!(stacks[0].is_full() && stacks[0].is_single_kind()));
    }

    #[test]
    fn test_breakup_preserves_items_and_lengths() {
        let mut stacks = dealt_stacks(31);
        let before = stacks_multiset(&stacks);
        let lengths: Vec<usize> = stacks.iter().map(Stack::len).collect();

        break_up_runs(&mut stacks, 1.0, &mut PuzzleRng::new(31));

        assert_eq!(stacks_multiset(&stacks), before);
        let after: Vec<usize> = stacks.iter().map(Stack::len).collect();
        assert_eq!(after, lengths);
    }

    #[test]
    fn test_breakup_zero_probability_is_identity() {
        let mut stacks = dealt_stacks(13);
        let before = stacks.clone();

        break_up_runs(&mut stacks, 0.0, &mut PuzzleRng::new(13));

        assert_eq!(stacks, before);
    }

    #[test]
    fn test_breakup_never_touches_empty_stacks() {
        let mut stacks = dealt_stacks(17);
        break_up_runs(&mut stacks, 1.0, &mut PuzzleRng::new(17));

        assert!(stacks[4].is_empty());
        assert!(stacks[5].is_empty());
    }

    #[test]
    fn test_swap_with_other_without_candidates() {
        let mut stacks = vec![
            Stack::from_items((0..CAPACITY as u32).map(|i| item(i, 0))),
            Stack::new(),
        ];
        let before = stacks.clone();

        let swapped = swap_with_other(&mut stacks, 0, 1, &mut PuzzleRng::new(2));

        assert!(!swapped);
        assert_eq!(stacks, before);
    }
}
