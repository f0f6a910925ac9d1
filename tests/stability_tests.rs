use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortkit::prelude::*;

/// Key/position pairs; only `key` takes part in the comparison.
fn keyed(rng: &mut StdRng, count: usize, distinct: u32) -> Vec<(u32, usize)> {
    (0..count).map(|pos| (rng.random_range(0..distinct), pos)).collect()
}

fn assert_stable_order(sorted: &[(u32, usize)]) {
    for (i, pair) in sorted.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.0 <= b.0, "Not sorted at index {}: {:?} then {:?}", i, a, b);
        if a.0 == b.0 {
            assert!(a.1 < b.1, "Equal keys reordered at index {}: {:?} then {:?}", i, a, b);
        }
    }
}

#[test]
fn test_stable_preserves_order_of_equal_keys() {
    let mut rng = StdRng::seed_from_u64(1234);

    for count in [2, 3, 19, 20, 21, 39, 40, 41, 100, 1_000, 5_000] {
        for distinct in [1, 2, 10, 1_000] {
            let mut input = keyed(&mut rng, count, distinct);
            stable_slice_by(&mut input, |a, b| a.0 < b.0);
            assert_stable_order(&input);
        }
    }
}

#[test]
fn test_stable_matches_std_stable_sort() {
    let mut rng = rand::rng();

    for _ in 0..300 {
        let count = rng.random_range(0..600);
        let input: Vec<(u32, usize)> = (0..count)
            .map(|pos| (rng.random_range(0..20), pos))
            .collect();

        let mut expected = input.clone();
        expected.sort_by_key(|pair| pair.0);

        let mut actual = input;
        stable_slice_by(&mut actual, |a, b| a.0 < b.0);
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_stable_descending_keeps_ties_in_input_order() {
    let mut input = vec![(1, 'a'), (3, 'b'), (1, 'c'), (2, 'd'), (3, 'e')];
    stable_slice_by(&mut input, |a, b| a.0 > b.0);
    assert_eq!(input, vec![(3, 'b'), (3, 'e'), (2, 'd'), (1, 'a'), (1, 'c')]);
}

#[test]
fn test_stable_through_reverse_adapter() {
    struct ByKey(Vec<(u32, usize)>);

    impl Sortable for ByKey {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i].0 < self.0[j].0
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j);
        }
    }

    let mut rng = StdRng::seed_from_u64(99);
    let mut data = Reverse(ByKey(keyed(&mut rng, 777, 8)));
    stable(&mut data);

    let sorted = data.into_inner().0;
    for pair in sorted.windows(2) {
        assert!(pair[0].0 >= pair[1].0);
        if pair[0].0 == pair[1].0 {
            assert!(pair[0].1 < pair[1].1);
        }
    }
}
