//! Least-significant-digit radix sort over 4-bit digit groups.

use tracing::trace;

use crate::error::{Result, ShuffleError};

/// Width of one digit group in bits.
pub const RADIX_BITS: u32 = 4;

/// Number of buckets per pass (`2^RADIX_BITS`).
pub const BUCKETS: usize = 1 << RADIX_BITS;

const DIGIT_MASK: u64 = (BUCKETS as u64) - 1;

/// Fixed-width integer key that can be split into 4-bit digits.
///
/// Digits are taken from the two's-complement bit pattern, so signed keys
/// order correctly only when non-negative.
pub trait RadixKey: Copy {
    /// Key width in bits.
    const BITS: u32;

    /// Returns the `RADIX_BITS`-wide digit starting at bit `shift`.
    fn digit(self, shift: u32) -> usize;

    /// Number of passes needed to cover every bit of the key.
    #[inline]
    fn passes() -> u32 {
        Self::BITS.div_ceil(RADIX_BITS)
    }
}

macro_rules! impl_radix_key {
    ($($t:ty => $bits:ty),* $(,)?) => {
        $(
            impl RadixKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn digit(self, shift: u32) -> usize {
                    (((self as $bits) >> shift) as u64 & DIGIT_MASK) as usize
                }
            }
        )*
    };
}

impl_radix_key!(i32 => u32, u32 => u32, i64 => u64, u64 => u64);

/// Sorts `keys` in place into non-decreasing order.
///
/// Runs `K::BITS / 4` stable counting-sort passes, least significant digit
/// first: count each digit, turn counts into exclusive prefix sums, scatter
/// into a scratch buffer at the running prefix, then copy back. Time is
/// `O(passes * len)` and extra space `O(len + 16)`.
///
/// Slices of length 0 or 1 return immediately without allocating.
///
/// Only non-negative values of signed key types are ordered correctly;
/// negative values sort after all non-negative ones.
///
/// # Errors
///
/// Returns [`ShuffleError::ResourceExhausted`] if the scratch buffer cannot
/// be allocated. `keys` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::sort::radix_sort;
///
/// let mut values = vec![5, 3, 3, 1];
/// radix_sort(&mut values).unwrap();
/// assert_eq!(values, vec![1, 3, 3, 5]);
/// ```
pub fn radix_sort<K: RadixKey>(keys: &mut [K]) -> Result<()> {
    let len = keys.len();
    if len < 2 {
        return Ok(());
    }

    let mut scratch: Vec<K> = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|_| ShuffleError::ResourceExhausted { requested: len })?;
    scratch.extend_from_slice(keys);

    let mut counts = [0usize; BUCKETS];
    let mut offsets = [0usize; BUCKETS];

    for pass in 0..K::passes() {
        let shift = pass * RADIX_BITS;

        counts.fill(0);
        for &key in keys.iter() {
            counts[key.digit(shift)] += 1;
        }

        // A pass where every key shares one digit would leave the order unchanged.
        if counts.iter().any(|&c| c == len) {
            continue;
        }

        offsets[0] = 0;
        for b in 1..BUCKETS {
            offsets[b] = offsets[b - 1] + counts[b - 1];
        }

        for &key in keys.iter() {
            let slot = &mut offsets[key.digit(shift)];
            scratch[*slot] = key;
            *slot += 1;
        }

        keys.copy_from_slice(&scratch);
        trace!(pass, "Radix pass complete");
    }

    Ok(())
}
