//! # Random Number Generation
//!
//! Random draws for the permutation engines.
//!
//! ## Design Rationale
//!
//! - **No per-call reseeding**: a generator is seeded once and reused, so
//!   successive permutations never come from correlated time-based seeds
//! - **Reproducibility**: [`ShuffleRng::from_seed`] gives deterministic
//!   permutations for tests and benchmarks
//! - **Static dispatch**: engines are generic over [`RandomRange`]; no
//!   `Box<dyn Trait>` in hot loops
//! - **Explicit sharing**: the process-wide instance is behind a mutex and
//!   only reachable through [`with_shared_rng`]
//!
//! ## Module Structure
//!
//! - [`source`]: the `RandomRange` contract and the `ShuffleRng` wrapper
//! - [`shared`]: the lazily initialised process-wide instance
//!
//! ## Usage Example
//!
//! ```rust
//! use shuffle_core::rng::{RandomRange, ShuffleRng};
//!
//! // Injected source for reproducible shuffles
//! let mut rng = ShuffleRng::from_seed(12345);
//! let j = rng.next_int(0, 100).unwrap();
//! assert!(j < 100);
//!
//! // Empty ranges are rejected
//! assert!(rng.next_int(5, 5).is_err());
//! ```

pub mod shared;
pub mod source;

pub use shared::with_shared_rng;
pub use source::{RandomRange, ShuffleRng};

#[cfg(test)]
mod tests;
