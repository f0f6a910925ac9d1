use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortkit::prelude::*;

/// Sorted copy of `data`, so two inputs compare equal iff they hold the same multiset.
fn multiset(data: &[u32]) -> Vec<u32> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    sorted
}

#[test]
fn test_inconsistent_comparator_keeps_permutation() {
    let mut rng = StdRng::seed_from_u64(42);

    // Neither irreflexive nor transitive. The order is unspecified, but the sorts must
    // terminate, stay in bounds, and neither drop nor duplicate elements.
    let chaotic = |a: &u32, b: &u32| (a ^ b.rotate_left(7)).count_ones() % 2 == 0;

    for _iter in 0..50 {
        let len = rng.random_range(0..3_000);
        let input: Vec<u32> = (0..len).map(|_| rng.random()).collect();

        let mut unstable = input.clone();
        sort_slice_by(&mut unstable, chaotic);
        assert_eq!(unstable.len(), input.len());
        assert_eq!(multiset(&unstable), multiset(&input));

        let mut stable_sorted = input.clone();
        stable_slice_by(&mut stable_sorted, chaotic);
        assert_eq!(multiset(&stable_sorted), multiset(&input));
    }
}

#[test]
fn test_always_true_comparator_terminates() {
    let mut input: Vec<u32> = (0..1_000).collect();
    sort_slice_by(&mut input, |_, _| true);
    assert_eq!(multiset(&input), (0..1_000).collect::<Vec<_>>());

    let mut input: Vec<u32> = (0..1_000).collect();
    stable_slice_by(&mut input, |_, _| true);
    assert_eq!(multiset(&input), (0..1_000).collect::<Vec<_>>());
}

#[test]
fn test_always_false_comparator_is_noop_for_stable() {
    // Everything compares equal, so a stable sort must not move anything.
    let input: Vec<u32> = (0..1_000).rev().collect();
    let mut actual = input.clone();
    stable_slice_by(&mut actual, |_, _| false);
    assert_eq!(actual, input);
}
