//! Integer sorting for permutation verification.
//!
//! Verification sorts generated permutations with a linear-time LSD radix
//! sort rather than the standard library's comparison sort, so correctness
//! checks never depend on the code paths they are meant to cross-check.
//!
//! - [`radix`]: the generic `RadixKey` sort over 4-bit digit groups

pub mod radix;

pub use radix::{radix_sort, RadixKey, BUCKETS, RADIX_BITS};

use tracing::debug;

use crate::error::Result;

/// Sorts a sequence of permutation values in place.
///
/// Thin entry point over [`radix_sort`] for the `i32` values the engines
/// produce. Negative values are not ordered correctly.
///
/// # Errors
///
/// Returns [`crate::ShuffleError::ResourceExhausted`] if the scratch
/// buffer cannot be allocated.
pub fn sort_in_place(values: &mut [i32]) -> Result<()> {
    debug!(len = values.len(), "Radix sorting permutation values");
    radix_sort(values)
}
