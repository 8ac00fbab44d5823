//! Permutation request configuration.
//!
//! This module provides [`PermutationConfig`] and its builder, bundling the
//! size of a permutation, the engine that produces it, and an optional seed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ShuffleError};
use crate::rng::{with_shared_rng, ShuffleRng};
use crate::shuffle::{PermutationFactory, ShuffleStrategy, MAX_PERMUTATION_LEN};

/// Count used when none is specified.
pub const DEFAULT_COUNT: usize = 10_000;

/// Permutation request configuration.
///
/// Immutable once built. Use [`PermutationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::config::PermutationConfig;
/// use shuffle_core::shuffle::ShuffleStrategy;
///
/// let config = PermutationConfig::builder()
///     .count(500)
///     .strategy(ShuffleStrategy::Durstenfeld)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// let values = config.generate().unwrap();
/// assert_eq!(values.len(), 500);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationConfig {
    /// Number of values to permute.
    count: usize,
    /// Engine used to produce the permutation.
    strategy: ShuffleStrategy,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            strategy: ShuffleStrategy::default(),
            seed: None,
        }
    }
}

impl PermutationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> PermutationConfigBuilder {
        PermutationConfigBuilder::default()
    }

    /// Returns the number of values to permute.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the selected strategy.
    #[inline]
    pub fn strategy(&self) -> ShuffleStrategy {
        self.strategy
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::InvalidArgument`] if `count` exceeds
    /// `i32::MAX`.
    pub fn validate(&self) -> Result<()> {
        if self.count > MAX_PERMUTATION_LEN {
            return Err(ShuffleError::invalid_argument(format!(
                "count {} exceeds maximum permutation length {}",
                self.count, MAX_PERMUTATION_LEN
            )));
        }
        Ok(())
    }

    /// Generates the configured permutation.
    ///
    /// Seeded configurations use a dedicated generator and are reproducible;
    /// unseeded ones draw from the process-wide shared source.
    ///
    /// # Errors
    ///
    /// Propagates errors from the selected engine.
    pub fn generate(&self) -> Result<Vec<i32>> {
        debug!(
            count = self.count,
            strategy = %self.strategy,
            seed = ?self.seed,
            "Generating permutation"
        );
        match self.seed {
            Some(seed) => self
                .strategy
                .generate(self.count, &mut ShuffleRng::from_seed(seed)),
            None => with_shared_rng(|rng| self.strategy.generate(self.count, rng)),
        }
    }
}

/// Builder for [`PermutationConfig`].
///
/// Validation happens at [`build`](PermutationConfigBuilder::build) time.
#[derive(Clone, Debug, Default)]
pub struct PermutationConfigBuilder {
    count: Option<usize>,
    strategy: ShuffleStrategy,
    seed: Option<u64>,
}

impl PermutationConfigBuilder {
    /// Sets the number of values to permute (default 10,000).
    #[inline]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the strategy.
    #[inline]
    pub fn strategy(mut self, strategy: ShuffleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::InvalidArgument`] if validation fails.
    pub fn build(self) -> Result<PermutationConfig> {
        let config = PermutationConfig {
            count: self.count.unwrap_or(DEFAULT_COUNT),
            strategy: self.strategy,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = PermutationConfig::builder().build().unwrap();
        assert_eq!(config.count(), DEFAULT_COUNT);
        assert_eq!(config.strategy(), ShuffleStrategy::Specialised);
        assert_eq!(config.seed(), None);
        assert_eq!(config, PermutationConfig::default());
    }

    #[test]
    fn test_builder_rejects_oversized_count() {
        let result = PermutationConfig::builder()
            .count(MAX_PERMUTATION_LEN + 1)
            .build();
        assert!(matches!(result, Err(ShuffleError::InvalidArgument(_))));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        for strategy in ShuffleStrategy::ALL {
            let config = PermutationConfig::builder()
                .count(200)
                .strategy(strategy)
                .seed(314)
                .build()
                .unwrap();
            assert_eq!(config.generate().unwrap(), config.generate().unwrap());
        }
    }

    #[test]
    fn test_unseeded_generation() {
        let config = PermutationConfig::builder()
            .count(30)
            .maybe_seed(None)
            .build()
            .unwrap();
        let mut values = config.generate().unwrap();
        values.sort_unstable();
        assert_eq!(values, (1..=30).collect::<Vec<i32>>());
    }
}
