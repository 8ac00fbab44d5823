//! In-place Fisher-Yates shuffle.

use crate::error::Result;
use crate::rng::RandomRange;

/// Shuffles `items` in place into a uniformly random order.
///
/// Walks from the last index down to 0, swapping each position with one
/// drawn uniformly from `[0, i]`. Every one of the `len!` orderings is
/// equally likely given a uniform source. The multiset of elements is never
/// changed and nothing is allocated.
///
/// Slices of length 0 or 1 are left untouched.
///
/// # Errors
///
/// Propagates errors from the random source; [`crate::rng::ShuffleRng`]
/// never fails for the ranges drawn here.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::rng::ShuffleRng;
/// use shuffle_core::shuffle::shuffle_in_place;
///
/// let mut rng = ShuffleRng::from_seed(42);
/// let mut cards = vec!['a', 'b', 'c', 'd'];
/// shuffle_in_place(&mut cards, &mut rng).unwrap();
///
/// cards.sort();
/// assert_eq!(cards, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R) -> Result<()>
where
    R: RandomRange + ?Sized,
{
    for i in (0..items.len()).rev() {
        let j = rng.next_int(0, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
