//! # shuffle_core: Uniform Permutation Engine
//!
//! Generates uniformly random permutations of `1..=N` and verifies them.
//!
//! ## Components
//!
//! - Random source: seedable `ShuffleRng` and a shared process-wide instance (`rng`)
//! - Value producers for generator-driven shuffles (`producer`)
//! - Permutation engines: Fisher-Yates, Durstenfeld, and the `i32`-specialised
//!   `IntegerPermutation` (`shuffle`)
//! - LSD radix sort over 4-bit digits (`sort`)
//! - Bijection and uniformity checks (`verify`)
//! - Request configuration (`config`)
//! - Error types: `ShuffleError` (`error`)
//!
//! ## Threading
//!
//! Every operation is synchronous and single-threaded. Engines borrow their
//! random source mutably, so an injected `ShuffleRng` can never be shared
//! during a shuffle. The process-wide source is guarded by a mutex; see
//! [`rng::shared`] for its lock discipline.
//!
//! ## Usage Examples
//!
//! ```rust
//! use shuffle_core::{generate_permutation, sort_in_place};
//!
//! let mut values = generate_permutation(100).unwrap();
//! assert_eq!(values.len(), 100);
//!
//! sort_in_place(&mut values).unwrap();
//! assert!(values.iter().copied().eq(1..=100));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod error;
pub mod producer;
pub mod rng;
pub mod shuffle;
pub mod sort;
pub mod verify;

pub use error::{Result, ShuffleError};
pub use sort::sort_in_place;

use rng::ShuffleRng;
use shuffle::IntegerPermutation;

/// Generates the values `1..=count` in uniformly random order.
///
/// Uses the specialised integer engine and the process-wide shared source.
///
/// # Errors
///
/// - [`ShuffleError::InvalidArgument`] if `count` exceeds `i32::MAX`
/// - [`ShuffleError::ResourceExhausted`] if the buffer cannot be allocated
pub fn generate_permutation(count: usize) -> Result<Vec<i32>> {
    IntegerPermutation::shuffled(count).map(IntegerPermutation::into_vec)
}

/// Generates the values `1..=count` in uniformly random order from `rng`.
///
/// # Errors
///
/// Same as [`generate_permutation`].
///
/// # Examples
///
/// ```rust
/// use shuffle_core::generate_permutation_with;
/// use shuffle_core::rng::ShuffleRng;
///
/// let a = generate_permutation_with(20, &mut ShuffleRng::from_seed(8)).unwrap();
/// let b = generate_permutation_with(20, &mut ShuffleRng::from_seed(8)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate_permutation_with(count: usize, rng: &mut ShuffleRng) -> Result<Vec<i32>> {
    IntegerPermutation::new(count, rng).map(IntegerPermutation::into_vec)
}

/// Converts a signed count from an external source into a permutation size.
///
/// # Errors
///
/// Returns [`ShuffleError::InvalidArgument`] for negative counts.
///
/// ```rust
/// use shuffle_core::count_from_signed;
///
/// assert_eq!(count_from_signed(10).unwrap(), 10);
/// assert!(count_from_signed(-1).is_err());
/// ```
pub fn count_from_signed(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        ShuffleError::invalid_argument(format!("count must be non-negative, got {}", count))
    })
}
