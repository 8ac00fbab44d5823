//! Exact correctness check for permutations of `1..=N`.

use crate::error::{Result, ShuffleError};
use crate::sort::sort_in_place;

/// Checks that `values` is a permutation of `1..=values.len()`.
///
/// Radix sorts a copy and compares it position by position with the
/// identity sequence, reporting the first mismatch.
///
/// # Errors
///
/// - [`ShuffleError::VerificationFailed`] naming the first offending position
/// - [`ShuffleError::ResourceExhausted`] if the copy cannot be allocated
///
/// # Examples
///
/// ```rust
/// use shuffle_core::verify::check_bijection;
///
/// assert!(check_bijection(&[3, 1, 2]).is_ok());
/// assert!(check_bijection(&[3, 3, 2]).is_err());
/// ```
pub fn check_bijection(values: &[i32]) -> Result<()> {
    let mut sorted: Vec<i32> = Vec::new();
    sorted
        .try_reserve_exact(values.len())
        .map_err(|_| ShuffleError::ResourceExhausted {
            requested: values.len(),
        })?;
    sorted.extend_from_slice(values);
    sort_in_place(&mut sorted)?;

    for (index, &value) in sorted.iter().enumerate() {
        let expected = index as i64 + 1;
        if value as i64 != expected {
            return Err(ShuffleError::verification(format!(
                "sorted position {} holds {}, expected {}",
                index, value, expected
            )));
        }
    }
    Ok(())
}

/// Returns `true` if `values` is a permutation of `1..=values.len()`.
pub fn is_permutation(values: &[i32]) -> bool {
    check_bijection(values).is_ok()
}
