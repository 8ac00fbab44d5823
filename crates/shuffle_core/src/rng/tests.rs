//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility
//! - The half-open range contract of `next_int`
//! - Rejection of empty ranges
//! - Reuse of the shared instance
//! - Range properties via property-based testing

use super::*;
use crate::error::ShuffleError;

/// Verifies that the same seed produces identical sequences.
#[test]
fn test_seed_reproducibility() {
    let mut rng1 = ShuffleRng::from_seed(12345);
    let mut rng2 = ShuffleRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(
            rng1.next_int(0, 1_000_000).unwrap(),
            rng2.next_int(0, 1_000_000).unwrap()
        );
    }
}

#[test]
fn test_seed_accessor() {
    assert_eq!(ShuffleRng::from_seed(42).seed(), Some(42));
    assert_eq!(ShuffleRng::from_entropy().seed(), None);
    assert_eq!(ShuffleRng::from_optional_seed(Some(9)).seed(), Some(9));
    assert_eq!(ShuffleRng::from_optional_seed(None).seed(), None);
}

/// Verifies that draws stay inside `[low, high)` and hit both ends.
#[test]
fn test_next_int_range() {
    let mut rng = ShuffleRng::from_seed(42);
    let mut seen_low = false;
    let mut seen_high = false;

    for _ in 0..10_000 {
        let value = rng.next_int(3, 8).unwrap();
        assert!((3..8).contains(&value), "value {} out of [3, 8)", value);
        seen_low |= value == 3;
        seen_high |= value == 7;
    }

    assert!(seen_low && seen_high);
}

#[test]
fn test_single_value_range() {
    let mut rng = ShuffleRng::from_seed(1);
    for _ in 0..100 {
        assert_eq!(rng.next_int(4, 5).unwrap(), 4);
    }
}

#[test]
fn test_empty_range_rejected() {
    let mut rng = ShuffleRng::from_seed(1);

    let err = rng.next_int(5, 5).unwrap_err();
    assert!(matches!(err, ShuffleError::InvalidArgument(_)));

    let err = rng.next_int(9, 2).unwrap_err();
    assert!(err.to_string().contains("[9, 2)"));
}

#[test]
fn test_index_upto_inclusive() {
    let mut rng = ShuffleRng::from_seed(3);
    assert_eq!(rng.index_upto(0), 0);
    for _ in 0..1000 {
        assert!(rng.index_upto(4) <= 4);
    }
}

#[test]
fn test_mut_ref_forwarding() {
    fn draw<R: RandomRange>(mut rng: R) -> usize {
        rng.next_int(0, 10).unwrap()
    }

    let mut a = ShuffleRng::from_seed(77);
    let mut b = ShuffleRng::from_seed(77);
    assert_eq!(draw(&mut a), b.next_int(0, 10).unwrap());
}

/// The shared instance is reused: consecutive calls advance one generator
/// instead of restarting it.
#[test]
fn test_shared_rng_reused() {
    let first: Vec<usize> = with_shared_rng(|rng| {
        (0..32).map(|_| rng.next_int(0, usize::MAX).unwrap()).collect()
    });
    let second: Vec<usize> = with_shared_rng(|rng| {
        (0..32).map(|_| rng.next_int(0, usize::MAX).unwrap()).collect()
    });

    assert_ne!(first, second);
    assert_eq!(with_shared_rng(|rng| rng.seed()), None);
}

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every draw lies in the requested half-open range for any seed.
    #[test]
    fn prop_next_int_in_range(seed in any::<u64>(), low in 0usize..1000, width in 1usize..1000) {
        let mut rng = ShuffleRng::from_seed(seed);
        let high = low + width;
        for _ in 0..100 {
            let v = rng.next_int(low, high).unwrap();
            prop_assert!(v >= low && v < high, "{} outside [{}, {})", v, low, high);
        }
    }

    /// Same seed must produce identical sequences.
    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), count in 1..500usize) {
        let mut rng1 = ShuffleRng::from_seed(seed);
        let mut rng2 = ShuffleRng::from_seed(seed);

        for i in 0..count {
            let v1 = rng1.next_int(0, i + 1).unwrap();
            let v2 = rng2.next_int(0, i + 1).unwrap();
            prop_assert_eq!(v1, v2, "Mismatch at index {} for seed {}", i, seed);
        }
    }
}
