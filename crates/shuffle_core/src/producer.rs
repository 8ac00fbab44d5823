//! Value producers for generator-driven shuffles.
//!
//! A producer is any [`Iterator`]: lazy, stateful, advanced exactly once per
//! element the shuffle places, and restartable only by building a fresh
//! instance. [`LinearSequence`] is the producer for permutations of `1..=N`.

use std::iter::FusedIterator;

/// Infinite increasing integer sequence `1, 2, 3, ...`.
///
/// Ends after yielding `i32::MAX`; a permutation of more values than that
/// cannot be represented in `i32` anyway.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::producer::LinearSequence;
///
/// let first: Vec<i32> = LinearSequence::new().take(4).collect();
/// assert_eq!(first, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct LinearSequence {
    next: Option<i32>,
}

impl LinearSequence {
    /// Creates a sequence starting at 1.
    #[inline]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a sequence starting at `start`.
    #[inline]
    pub fn starting_at(start: i32) -> Self {
        Self { next: Some(start) }
    }
}

impl Default for LinearSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LinearSequence {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(n) => {
                let remaining = (i32::MAX as i64 - n as i64 + 1) as usize;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for LinearSequence {}

/// Returns the producer `1, 2, 3, ...`.
#[inline]
pub fn linear_sequence() -> LinearSequence {
    LinearSequence::new()
}
