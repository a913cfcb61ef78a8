use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Value range used by the benchmark when none is given.
pub const DEFAULT_RANGE: Range<i32> = 1..100;

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a random vector of `n` values in `range`.
/// Passing a `seed` makes the output reproducible.
///
/// # Panics
/// If `range` is empty and `n > 0`.
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_sequence;
///
/// let v = gen_sequence(5, 1..100, Some(42));
/// assert_eq!(v.len(), 5);
/// assert!(v.iter().all(|x| (1..100).contains(x)));
/// assert_eq!(v, gen_sequence(5, 1..100, Some(42)));
/// ```
pub fn gen_sequence(n: usize, range: Range<i32>, seed: Option<u64>) -> Vec<i32> {
    let mut rng = make_rng(seed);
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// Generates a shuffled vector of `n` values where `value` fills `n / 2 + 1`
/// positions and the rest are drawn from `range`.
/// The result always has `value` as its majority element.
///
/// # Panics
/// If `range` is empty and `n > 1`.
///
/// ## Examples
/// ```
/// use majority::gen_sequences::gen_sequence_with_majority;
///
/// let v = gen_sequence_with_majority(9, 7, 1..100, None);
/// assert_eq!(v.len(), 9);
/// assert!(v.iter().filter(|&&x| x == 7).count() >= 5);
/// ```
pub fn gen_sequence_with_majority(
    n: usize,
    value: i32,
    range: Range<i32>,
    seed: Option<u64>,
) -> Vec<i32> {
    if n == 0 {
        return Vec::new();
    }

    let mut rng = make_rng(seed);
    let planted = n / 2 + 1;
    let mut v = Vec::with_capacity(n);
    v.resize(planted, value);
    v.extend((planted..n).map(|_| rng.random_range(range.clone())));
    v.shuffle(&mut rng);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_stays_in_range() {
        let v = gen_sequence(1000, -5..5, None);
        assert_eq!(v.len(), 1000);
        assert!(v.iter().all(|x| (-5..5).contains(x)));
    }

    #[test]
    fn empty_sequence() {
        assert!(gen_sequence(0, DEFAULT_RANGE, None).is_empty());
        assert!(gen_sequence_with_majority(0, 1, DEFAULT_RANGE, None).is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = gen_sequence_with_majority(100, 3, DEFAULT_RANGE, Some(7));
        let b = gen_sequence_with_majority(100, 3, DEFAULT_RANGE, Some(7));
        assert_eq!(a, b);
    }

    #[test]
    fn planted_value_is_majority() {
        for n in 1..50 {
            let v = gen_sequence_with_majority(n, 1000, DEFAULT_RANGE, Some(n as u64));
            assert_eq!(v.len(), n);
            assert!(v.iter().filter(|&&x| x == 1000).count() > n / 2);
        }
    }

    #[test]
    fn single_planted_value_ignores_range() {
        // the range is never sampled when every slot is planted
        #[allow(clippy::reversed_empty_ranges)]
        let v = gen_sequence_with_majority(1, 4, 0..0, None);
        assert_eq!(v, vec![4]);
    }
}
