//! Verification of generated permutations.
//!
//! - [`bijection`]: exact check that a sequence is a permutation of `1..=N`
//! - [`uniformity`]: frequency test over all orderings of a small permutation
//!
//! Uniformity is a statistical property: [`UniformityTest`] documents its
//! false-failure rate next to the tolerance it applies.

pub mod bijection;
pub mod uniformity;

pub use bijection::{check_bijection, is_permutation};
pub use uniformity::{factorial, OrderingStats, UniformityReport, UniformityTest};
