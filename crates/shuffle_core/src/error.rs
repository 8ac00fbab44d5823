//! Error types for the permutation engine.
//!
//! This module provides:
//! - `ShuffleError`: Errors from random draws, shuffles, and radix sorting
//! - `Result`: Convenience alias used throughout the crate

use thiserror::Error;

/// Categorised permutation engine errors.
///
/// Every operation in the crate either fully succeeds or fully fails; no
/// variant is ever retried internally.
///
/// # Variants
/// - `InvalidArgument`: Negative or oversized count, or an empty random range
/// - `ResourceExhausted`: A buffer could not be allocated
/// - `ProducerExhausted`: A value producer ended before the requested count
/// - `VerificationFailed`: A permutation failed its bijection check
///
/// # Examples
/// ```
/// use shuffle_core::ShuffleError;
///
/// let err = ShuffleError::InvalidArgument("count must be non-negative".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: count must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// Invalid count or range bounds.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Allocation of a working buffer failed.
    #[error("Resource exhausted: unable to allocate {requested} elements")]
    ResourceExhausted {
        /// Number of elements that were requested
        requested: usize,
    },

    /// The value producer ended before yielding the requested count.
    #[error("Producer exhausted after {produced} of {requested} values")]
    ProducerExhausted {
        /// Number of values the shuffle needed
        requested: usize,
        /// Number of values the producer actually yielded
        produced: usize,
    },

    /// A generated sequence is not a permutation of `1..=N`.
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl ShuffleError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a verification error
    pub fn verification(msg: impl Into<String>) -> Self {
        Self::VerificationFailed(msg.into())
    }
}

/// Result alias for permutation engine operations.
pub type Result<T> = std::result::Result<T, ShuffleError>;
