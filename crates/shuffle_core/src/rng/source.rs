//! Seedable random source for the shuffle engines.
//!
//! This module provides the [`RandomRange`] contract and [`ShuffleRng`], a
//! `StdRng` wrapper that is seeded once and reused across every shuffle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, ShuffleError};

/// Uniform integer draws over a half-open range.
///
/// Implementors must return values uniformly distributed over
/// `[low, high)` and must not reseed between calls.
pub trait RandomRange {
    /// Draws an integer uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::InvalidArgument`] when `high <= low`.
    fn next_int(&mut self, low: usize, high: usize) -> Result<usize>;
}

/// Random source used by the permutation engines.
///
/// Static dispatch only: the engines take `&mut ShuffleRng` (or any
/// [`RandomRange`]) by generic parameter, never `Box<dyn RandomRange>`.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::rng::{RandomRange, ShuffleRng};
///
/// let mut rng = ShuffleRng::from_seed(42);
/// let j = rng.next_int(0, 10).unwrap();
/// assert!(j < 10);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffleRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Seed used for initialisation, when one was supplied.
    seed: Option<u64>,
}

impl ShuffleRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws, and
    /// therefore the same permutations.
    ///
    /// ```rust
    /// use shuffle_core::rng::{RandomRange, ShuffleRng};
    ///
    /// let mut a = ShuffleRng::from_seed(7);
    /// let mut b = ShuffleRng::from_seed(7);
    /// assert_eq!(a.next_int(0, 1000).unwrap(), b.next_int(0, 1000).unwrap());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded once from operating system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a generator from an explicit seed, or from entropy when `None`.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws an index uniformly from `[0, i]`.
    ///
    /// Unchecked variant of `next_int(0, i + 1)` for hot loops where the
    /// bound is valid by construction.
    #[inline]
    pub(crate) fn index_upto(&mut self, i: usize) -> usize {
        self.inner.gen_range(0..=i)
    }
}

impl RandomRange for ShuffleRng {
    #[inline]
    fn next_int(&mut self, low: usize, high: usize) -> Result<usize> {
        if high <= low {
            return Err(ShuffleError::invalid_argument(format!(
                "empty range [{}, {})",
                low, high
            )));
        }
        Ok(self.inner.gen_range(low..high))
    }
}

impl<R: RandomRange + ?Sized> RandomRange for &mut R {
    #[inline]
    fn next_int(&mut self, low: usize, high: usize) -> Result<usize> {
        (**self).next_int(low, high)
    }
}
