use rand::Rng;

/// In-place Fisher-Yates shuffle.
///
/// Walks from the last index down to 1, swapping each element with one drawn uniformly from
/// `[0, i]`. The number and order of draws is fixed for a given length, so a seeded `rng` always
/// yields the same permutation.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0, i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod test_shuffle {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_permutation() {
        let mut a: Vec<u32> = (0..16).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(1234));
        shuffle(&mut b, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn short_slices_are_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut one = [42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [42]);
    }

    #[test]
    fn every_position_gets_every_value() {
        // 4 elements, enough draws that each value should land in each slot
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [[false; 4]; 4];
        for _ in 0..500 {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            for (slot, value) in items.iter().enumerate() {
                seen[slot][*value] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }
}
