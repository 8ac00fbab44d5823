//! # Permutation Engine
//!
//! Uniform random permutations through three engines sharing one contract:
//! every ordering of the input is equally likely given a uniform source.
//!
//! ## Module Structure
//!
//! - [`fisher_yates`]: in-place swap shuffle of an existing slice, generic over `T`
//! - [`durstenfeld`]: construct-and-shuffle driven by a value producer, generic over `T`
//! - [`permutation`]: `IntegerPermutation`, the `i32`-specialised hot path
//! - [`strategy`]: `ShuffleStrategy` and the `PermutationFactory` contract
//!
//! ## Choosing an Engine
//!
//! | Engine | Input | Allocates | Element type |
//! |---|---|---|---|
//! | `shuffle_in_place` | existing slice | no | any `T` |
//! | `construct_shuffled` | producer | output only | any `T: Clone` |
//! | `IntegerPermutation` | count | output only | `i32` |
//!
//! ## Usage Example
//!
//! ```rust
//! use shuffle_core::rng::ShuffleRng;
//! use shuffle_core::shuffle::{shuffle_in_place, IntegerPermutation};
//!
//! let mut rng = ShuffleRng::from_seed(7);
//!
//! let mut deck: Vec<u8> = (0..52).collect();
//! shuffle_in_place(&mut deck, &mut rng).unwrap();
//!
//! let perm = IntegerPermutation::new(10, &mut rng).unwrap();
//! assert_eq!(perm.len(), 10);
//! ```

pub mod durstenfeld;
pub mod fisher_yates;
pub mod permutation;
pub mod strategy;

pub use durstenfeld::construct_shuffled;
pub use fisher_yates::shuffle_in_place;
pub use permutation::{IntegerPermutation, MAX_PERMUTATION_LEN};
pub use strategy::{PermutationFactory, ShuffleStrategy};
