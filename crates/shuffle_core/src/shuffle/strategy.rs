//! Interchangeable permutation strategies.
//!
//! Each [`ShuffleStrategy`] produces a permutation of `1..=N` through a
//! different engine, behind the common [`PermutationFactory`] contract, so
//! tests and benchmarks can run the same checks over all of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{construct_shuffled, shuffle_in_place, IntegerPermutation, MAX_PERMUTATION_LEN};
use crate::error::{Result, ShuffleError};
use crate::producer::linear_sequence;
use crate::rng::ShuffleRng;

/// Produces permutations of `1..=size`.
pub trait PermutationFactory {
    /// Generates a uniformly shuffled permutation of `1..=size`.
    ///
    /// # Errors
    ///
    /// - [`ShuffleError::InvalidArgument`] if `size` exceeds `i32::MAX`
    /// - [`ShuffleError::ResourceExhausted`] on allocation failure
    fn generate(&self, size: usize, rng: &mut ShuffleRng) -> Result<Vec<i32>>;
}

/// Permutation engine selection.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::rng::ShuffleRng;
/// use shuffle_core::shuffle::{PermutationFactory, ShuffleStrategy};
///
/// let strategy: ShuffleStrategy = "durstenfeld".parse().unwrap();
/// let mut rng = ShuffleRng::from_seed(1);
/// let values = strategy.generate(5, &mut rng).unwrap();
/// assert_eq!(values.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShuffleStrategy {
    /// Fill `1..=N`, then Fisher-Yates shuffle in place.
    FisherYates,
    /// Construct-and-shuffle driven by a linear value producer.
    Durstenfeld,
    /// Inline Durstenfeld pass over an [`IntegerPermutation`] buffer.
    #[default]
    Specialised,
}

impl ShuffleStrategy {
    /// All strategies, in a fixed order.
    pub const ALL: [ShuffleStrategy; 3] = [
        ShuffleStrategy::FisherYates,
        ShuffleStrategy::Durstenfeld,
        ShuffleStrategy::Specialised,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ShuffleStrategy::FisherYates => "fisher-yates",
            ShuffleStrategy::Durstenfeld => "durstenfeld",
            ShuffleStrategy::Specialised => "specialised",
        }
    }
}

impl PermutationFactory for ShuffleStrategy {
    fn generate(&self, size: usize, rng: &mut ShuffleRng) -> Result<Vec<i32>> {
        if size > MAX_PERMUTATION_LEN {
            return Err(ShuffleError::invalid_argument(format!(
                "count {} exceeds maximum permutation length {}",
                size, MAX_PERMUTATION_LEN
            )));
        }

        match self {
            ShuffleStrategy::FisherYates => {
                let mut values: Vec<i32> = Vec::new();
                values
                    .try_reserve_exact(size)
                    .map_err(|_| ShuffleError::ResourceExhausted { requested: size })?;
                values.extend(linear_sequence().take(size));
                shuffle_in_place(&mut values, rng)?;
                Ok(values)
            }
            ShuffleStrategy::Durstenfeld => construct_shuffled(size, linear_sequence(), rng),
            ShuffleStrategy::Specialised => {
                IntegerPermutation::new(size, rng).map(IntegerPermutation::into_vec)
            }
        }
    }
}

impl fmt::Display for ShuffleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShuffleStrategy {
    type Err = ShuffleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "fisher-yates" | "fy" => Ok(ShuffleStrategy::FisherYates),
            "durstenfeld" => Ok(ShuffleStrategy::Durstenfeld),
            "specialised" | "specialized" | "fast" => Ok(ShuffleStrategy::Specialised),
            other => Err(ShuffleError::invalid_argument(format!(
                "unknown strategy '{}'. Supported: fisher-yates, durstenfeld, specialised",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_strategy_is_a_bijection() {
        let mut rng = ShuffleRng::from_seed(2024);
        for strategy in ShuffleStrategy::ALL {
            let mut values = strategy.generate(100, &mut rng).unwrap();
            values.sort_unstable();
            assert_eq!(
                values,
                (1..=100).collect::<Vec<i32>>(),
                "strategy {} is not a bijection",
                strategy
            );
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        let mut rng = ShuffleRng::from_seed(1);
        for strategy in ShuffleStrategy::ALL {
            assert!(strategy.generate(0, &mut rng).unwrap().is_empty());
            assert_eq!(strategy.generate(1, &mut rng).unwrap(), vec![1]);
        }
    }

    #[test]
    fn test_oversized_count_rejected() {
        let mut rng = ShuffleRng::from_seed(1);
        for strategy in ShuffleStrategy::ALL {
            let err = strategy
                .generate(MAX_PERMUTATION_LEN + 1, &mut rng)
                .unwrap_err();
            assert!(matches!(err, ShuffleError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        for strategy in ShuffleStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<ShuffleStrategy>().unwrap(), strategy);
        }
        assert_eq!(
            "Fisher_Yates".parse::<ShuffleStrategy>().unwrap(),
            ShuffleStrategy::FisherYates
        );
        assert_eq!(
            "specialized".parse::<ShuffleStrategy>().unwrap(),
            ShuffleStrategy::Specialised
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogosort".parse::<ShuffleStrategy>().unwrap_err();
        assert!(err.to_string().contains("bogosort"));
    }

    #[test]
    fn test_default_is_specialised() {
        assert_eq!(ShuffleStrategy::default(), ShuffleStrategy::Specialised);
    }
}
