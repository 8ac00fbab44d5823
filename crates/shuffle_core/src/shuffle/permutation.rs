//! Integer-specialised permutation buffer.
//!
//! [`IntegerPermutation`] owns a fixed-length `i32` buffer that is shuffled
//! into a permutation of `1..=N` the moment it is created. The generator of
//! the Durstenfeld pass is inlined as the index counter itself, so the hot
//! loop is two stores and one random draw per element.
//!
//! # Ownership
//!
//! The buffer is allocated once in [`IntegerPermutation::new`] and released
//! exactly once: on drop, or by [`IntegerPermutation::release`] /
//! [`IntegerPermutation::into_vec`], which consume the value. A released
//! permutation cannot be observed again because it no longer exists.

use std::ops::Deref;

use tracing::debug;

use crate::error::{Result, ShuffleError};
use crate::rng::{with_shared_rng, ShuffleRng};
use crate::sort::radix_sort;

/// Largest permutation whose values fit in `i32`.
pub const MAX_PERMUTATION_LEN: usize = i32::MAX as usize;

/// A uniformly shuffled permutation of `1..=N` in a fixed-size buffer.
///
/// Implements `Deref<Target = [i32]>` for read access. Mutation is limited
/// to operations that keep the contents a permutation ([`reshuffle`] and
/// [`sort`]).
///
/// [`reshuffle`]: IntegerPermutation::reshuffle
/// [`sort`]: IntegerPermutation::sort
///
/// # Example
///
/// ```rust
/// use shuffle_core::rng::ShuffleRng;
/// use shuffle_core::shuffle::IntegerPermutation;
///
/// let mut rng = ShuffleRng::from_seed(42);
/// let mut perm = IntegerPermutation::new(1000, &mut rng).unwrap();
/// assert_eq!(perm.len(), 1000);
///
/// perm.sort().unwrap();
/// assert!(perm.iter().copied().eq(1..=1000));
/// ```
pub struct IntegerPermutation {
    values: Box<[i32]>,
}

impl IntegerPermutation {
    /// Allocates `count` slots and shuffles `1..=count` into them.
    ///
    /// # Errors
    ///
    /// - [`ShuffleError::InvalidArgument`] if `count` exceeds `i32::MAX`
    /// - [`ShuffleError::ResourceExhausted`] if the buffer cannot be allocated
    pub fn new(count: usize, rng: &mut ShuffleRng) -> Result<Self> {
        if count > MAX_PERMUTATION_LEN {
            return Err(ShuffleError::invalid_argument(format!(
                "count {} exceeds maximum permutation length {}",
                count, MAX_PERMUTATION_LEN
            )));
        }

        let mut values: Vec<i32> = Vec::new();
        values
            .try_reserve_exact(count)
            .map_err(|_| ShuffleError::ResourceExhausted { requested: count })?;

        // Slots are written straight into the reserved capacity, so the
        // buffer is never zero-filled and no push reallocates.
        if count > 0 {
            values.push(1);
        }
        for i in 1..count {
            let j = rng.index_upto(i);
            // `i + 1 <= count <= i32::MAX` was checked above.
            let next = (i + 1) as i32;
            if j == i {
                values.push(next);
            } else {
                // SAFETY: `j < i == values.len()` before the push.
                unsafe {
                    let displaced = *values.get_unchecked(j);
                    values.push(displaced);
                    *values.get_unchecked_mut(j) = next;
                }
            }
        }

        debug!(count, "Integer permutation generated");
        Ok(Self {
            values: values.into_boxed_slice(),
        })
    }

    /// Allocates and shuffles using the process-wide shared source.
    ///
    /// # Errors
    ///
    /// Same as [`IntegerPermutation::new`].
    pub fn shuffled(count: usize) -> Result<Self> {
        with_shared_rng(|rng| Self::new(count, rng))
    }

    /// Overwrites the buffer with a fresh uniform permutation of `1..=N`.
    ///
    /// The previous contents are ignored, so this also restores a valid
    /// permutation after [`IntegerPermutation::sort`].
    pub fn reshuffle(&mut self, rng: &mut ShuffleRng) {
        let values = &mut *self.values;
        let n = values.len();
        if n == 0 {
            return;
        }

        values[0] = 1;
        for i in 1..n {
            let j = rng.index_upto(i);
            // SAFETY: `j <= i < n`, so both indices are in bounds.
            unsafe {
                *values.get_unchecked_mut(i) = *values.get_unchecked(j);
                // `i + 1 <= n <= i32::MAX` was checked at construction.
                *values.get_unchecked_mut(j) = (i + 1) as i32;
            }
        }
    }

    /// Sorts the contents in place with the radix sorter.
    ///
    /// For a valid permutation the result is exactly `1..=N`.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::ResourceExhausted`] if the scratch buffer
    /// cannot be allocated; the contents are unchanged in that case.
    pub fn sort(&mut self) -> Result<()> {
        radix_sort(&mut self.values[..])
    }

    /// Number of elements in the permutation.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` for the empty permutation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read access to the values.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Consumes the permutation and returns its buffer as a `Vec`.
    ///
    /// No copy is made; ownership of the allocation moves to the caller.
    pub fn into_vec(self) -> Vec<i32> {
        self.values.into_vec()
    }

    /// Releases the buffer immediately.
    ///
    /// Equivalent to dropping the value; provided for call sites that want
    /// the release to be explicit.
    pub fn release(self) {
        debug!(len = self.len(), "Releasing integer permutation");
        drop(self);
    }
}

impl Deref for IntegerPermutation {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[i32]> for IntegerPermutation {
    fn as_ref(&self) -> &[i32] {
        &self.values
    }
}

impl From<IntegerPermutation> for Vec<i32> {
    fn from(perm: IntegerPermutation) -> Self {
        perm.into_vec()
    }
}

impl std::fmt::Debug for IntegerPermutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntegerPermutation")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bijection_after_sort() {
        let mut rng = ShuffleRng::from_seed(42);
        let mut perm = IntegerPermutation::new(10_000, &mut rng).unwrap();
        perm.sort().unwrap();

        for (i, &v) in perm.iter().enumerate() {
            assert_eq!(v, i as i32 + 1);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        let mut rng = ShuffleRng::from_seed(42);

        let empty = IntegerPermutation::new(0, &mut rng).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.as_slice(), &[] as &[i32]);

        let single = IntegerPermutation::new(1, &mut rng).unwrap();
        assert_eq!(single.as_slice(), &[1]);
    }

    #[test]
    fn test_rejects_oversized_count() {
        let mut rng = ShuffleRng::from_seed(42);
        let err = IntegerPermutation::new(MAX_PERMUTATION_LEN + 1, &mut rng).unwrap_err();
        assert!(matches!(err, ShuffleError::InvalidArgument(_)));
    }

    #[test]
    fn test_reshuffle_restores_permutation() {
        let mut rng = ShuffleRng::from_seed(11);
        let mut perm = IntegerPermutation::new(64, &mut rng).unwrap();
        perm.sort().unwrap();
        perm.reshuffle(&mut rng);

        let mut values = perm.into_vec();
        values.sort_unstable();
        assert_eq!(values, (1..=64).collect::<Vec<i32>>());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let a = IntegerPermutation::new(100, &mut ShuffleRng::from_seed(5)).unwrap();
        let b = IntegerPermutation::new(100, &mut ShuffleRng::from_seed(5)).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_construction_matches_reshuffle() {
        for count in [0, 1, 2, 7, 1_000] {
            let built = IntegerPermutation::new(count, &mut ShuffleRng::from_seed(21)).unwrap();

            let mut again = IntegerPermutation::new(count, &mut ShuffleRng::from_seed(0)).unwrap();
            again.reshuffle(&mut ShuffleRng::from_seed(21));

            assert_eq!(built.as_slice(), again.as_slice(), "count {}", count);
        }
    }

    #[test]
    fn test_shared_source() {
        let mut values: Vec<i32> = IntegerPermutation::shuffled(50).unwrap().into();
        values.sort_unstable();
        assert_eq!(values, (1..=50).collect::<Vec<i32>>());
    }

    #[test]
    fn test_into_vec_keeps_allocation() {
        let mut rng = ShuffleRng::from_seed(3);
        let perm = IntegerPermutation::new(16, &mut rng).unwrap();
        let ptr = perm.as_ptr();
        let values = perm.into_vec();
        assert_eq!(values.as_ptr(), ptr);
    }

    #[test]
    fn test_release_and_debug() {
        let mut rng = ShuffleRng::from_seed(3);
        let perm = IntegerPermutation::new(8, &mut rng).unwrap();
        assert_eq!(format!("{:?}", perm), "IntegerPermutation { len: 8 }");
        perm.release();
    }
}
