//! Randomized Rearrangement
//!
//! Fisher-Yates walk from the back of the sequence where each position is
//! swapped with a strictly lower index (the draw is from `[0, i)`, not
//! `[0, i]`). This is Sattolo's variant: the result is always a single cycle,
//! so with pairwise distinct values no element stays where it started, and
//! the output equals the input only when all values are equal. It is not a
//! uniform shuffle over all permutations.

use crate::error::Result;
use crate::sequence::require_input;
use rand::Rng;
use tracing::trace;

const OPERATION: &str = "shuffle";

/// Shuffle a sequence using the thread-local random source.
///
/// Returns a new sequence holding the same values in randomized order.
pub fn shuffle(input: Option<&[i32]>) -> Result<Vec<i32>> {
    shuffle_with_rng(input, &mut rand::thread_rng())
}

/// Shuffle a sequence drawing from the supplied random source.
///
/// A single-element sequence is returned as-is without consuming entropy.
pub fn shuffle_with_rng<R: Rng + ?Sized>(input: Option<&[i32]>, rng: &mut R) -> Result<Vec<i32>> {
    let seq = require_input(input, OPERATION)?;
    trace!(len = seq.len(), "shuffle");

    let mut data = seq.to_vec();
    for i in (1..data.len()).rev() {
        let k = rng.gen_range(0..i);
        data.swap(k, i);
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SorterError;
    use crate::sequence::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_missing() {
        assert_eq!(
            shuffle(None),
            Err(SorterError::MissingInput {
                operation: "shuffle"
            })
        );
    }

    #[test]
    fn test_shuffle_empty() {
        assert_eq!(
            shuffle(Some(&[])),
            Err(SorterError::EmptyInput {
                operation: "shuffle"
            })
        );
    }

    #[test]
    fn test_shuffle_single() {
        assert_eq!(shuffle(Some(&[5])).unwrap(), vec![5]);
    }

    #[test]
    fn test_shuffle_two_elements_always_swaps() {
        for _ in 0..50 {
            assert_eq!(shuffle(Some(&[2, 1])).unwrap(), vec![1, 2]);
        }
    }

    #[test]
    fn test_shuffle_all_same() {
        let data = vec![1; 20];
        assert_eq!(shuffle(Some(&data)).unwrap(), data);
    }

    #[test]
    fn test_shuffle_preserves_values() {
        let mut rng = rand::thread_rng();
        let data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-50..50)).collect();
        let shuffled = shuffle(Some(&data)).unwrap();
        assert_eq!(shuffled.len(), data.len());
        assert!(is_permutation(&data, &shuffled));
    }

    #[test]
    fn test_shuffle_distinct_values_all_move() {
        let data: Vec<i32> = (0..100).collect();
        for _ in 0..20 {
            let shuffled = shuffle(Some(&data)).unwrap();
            assert!(data.iter().zip(&shuffled).all(|(a, b)| a != b));
        }
    }

    #[test]
    fn test_shuffle_with_duplicates_always_changes() {
        let data = vec![1, 2, 1, 2, 1, 1];
        for _ in 0..50 {
            let shuffled = shuffle(Some(&data)).unwrap();
            assert!(is_permutation(&data, &shuffled));
            assert_ne!(shuffled, data);
        }
    }

    #[test]
    fn test_shuffle_does_not_touch_input() {
        let data = vec![1, 2, 3, 4];
        let _ = shuffle(Some(&data)).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shuffle_seeded_is_reproducible() {
        let data: Vec<i32> = (0..64).collect();
        let a = shuffle_with_rng(Some(&data), &mut StdRng::seed_from_u64(7)).unwrap();
        let b = shuffle_with_rng(Some(&data), &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
