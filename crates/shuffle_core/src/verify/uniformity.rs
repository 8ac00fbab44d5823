//! Statistical uniformity check over small permutations.
//!
//! Draws many permutations of a few items, counts how often each of the
//! `items!` orderings appears, and summarises the spread of those counts
//! around the theoretical `samples / items!`.
//!
//! # Tolerance
//!
//! The reported standard error is `sqrt(sum((count - expected)^2) / samples)`
//! over all orderings, observed or not. For a uniform shuffle
//! `sum((count - expected)^2) / expected` follows a chi-squared distribution
//! with `items! - 1` degrees of freedom, so the statistic sits near 1.0.
//! With the defaults (100,000 samples of 5 items, tolerance 1.5) a false
//! failure needs chi-squared above 270 on 119 degrees of freedom, which has
//! probability well below 1e-12. The verdict rests on the standard error
//! alone; at larger item counts many orderings may go unobserved without
//! indicating bias.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, ShuffleError};
use crate::rng::ShuffleRng;
use crate::shuffle::PermutationFactory;

/// Default number of permutations drawn.
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Default number of items per permutation (120 orderings).
pub const DEFAULT_ITEMS: usize = 5;

/// Default upper bound on the standard error.
pub const DEFAULT_TOLERANCE: f64 = 1.5;

/// Largest item count accepted; 8! = 40,320 orderings.
pub const MAX_ITEMS: usize = 8;

/// Classic `n!`, or `None` if it overflows `u64`.
///
/// ```rust
/// use shuffle_core::verify::factorial;
///
/// assert_eq!(factorial(5), Some(120));
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Per-ordering first-order statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrderingStats {
    /// Number of times the ordering was drawn.
    pub count: u64,
    /// `count - expected`.
    pub deviation: f64,
    /// `deviation^2`.
    pub squared_deviation: f64,
}

impl OrderingStats {
    fn new(count: u64, expected: f64) -> Self {
        let deviation = count as f64 - expected;
        Self {
            count,
            deviation,
            squared_deviation: deviation * deviation,
        }
    }
}

/// Summary of a uniformity run.
#[derive(Clone, Debug)]
pub struct UniformityReport {
    /// Permutations drawn.
    pub samples: usize,
    /// Items per permutation.
    pub items: usize,
    /// Number of possible orderings (`items!`).
    pub orderings: u64,
    /// Number of orderings drawn at least once.
    pub distinct_observed: usize,
    /// Theoretical count per ordering (`samples / items!`).
    pub expected_count: f64,
    /// `sqrt(sum of squared deviations / samples)`.
    pub standard_error: f64,
    /// Pearson chi-squared statistic.
    pub chi_squared: f64,
    /// Largest absolute deviation of any ordering from `expected_count`.
    pub max_abs_deviation: f64,
    /// Tolerance the run was judged against.
    pub tolerance: f64,
    /// Per-ordering statistics, keyed by the ordering.
    pub distribution: HashMap<Vec<i32>, OrderingStats>,
}

impl UniformityReport {
    /// Returns `true` when the standard error is under the tolerance.
    ///
    /// `distinct_observed` is informational only: at 8 items and the default
    /// sample count many orderings are legitimately never drawn.
    pub fn passed(&self) -> bool {
        self.standard_error < self.tolerance
    }
}

/// Configuration for a uniformity run.
///
/// # Examples
///
/// ```rust
/// use shuffle_core::rng::ShuffleRng;
/// use shuffle_core::shuffle::ShuffleStrategy;
/// use shuffle_core::verify::UniformityTest;
///
/// let test = UniformityTest::new(12_000, 3, 1.5).unwrap();
/// let report = test
///     .run(&ShuffleStrategy::FisherYates, &mut ShuffleRng::from_seed(1))
///     .unwrap();
/// assert_eq!(report.orderings, 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformityTest {
    samples: usize,
    items: usize,
    tolerance: f64,
}

impl Default for UniformityTest {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            items: DEFAULT_ITEMS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl UniformityTest {
    /// Creates a run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::InvalidArgument`] if `samples` is 0, `items`
    /// is outside `[1, MAX_ITEMS]`, or `tolerance` is not positive.
    pub fn new(samples: usize, items: usize, tolerance: f64) -> Result<Self> {
        if samples == 0 {
            return Err(ShuffleError::invalid_argument("samples must be > 0"));
        }
        if items == 0 || items > MAX_ITEMS {
            return Err(ShuffleError::invalid_argument(format!(
                "items {} outside [1, {}]",
                items, MAX_ITEMS
            )));
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ShuffleError::invalid_argument(format!(
                "tolerance {} must be positive",
                tolerance
            )));
        }
        Ok(Self {
            samples,
            items,
            tolerance,
        })
    }

    /// Permutations drawn per run.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Items per permutation.
    #[inline]
    pub fn items(&self) -> usize {
        self.items
    }

    /// Standard error tolerance.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Draws `samples` permutations from `factory` and summarises them.
    ///
    /// # Errors
    ///
    /// Propagates any error from the factory.
    pub fn run<F>(&self, factory: &F, rng: &mut ShuffleRng) -> Result<UniformityReport>
    where
        F: PermutationFactory + ?Sized,
    {
        let orderings = factorial(self.items as u64).ok_or_else(|| {
            ShuffleError::invalid_argument(format!("{}! overflows u64", self.items))
        })?;
        let expected = self.samples as f64 / orderings as f64;

        let mut counts: HashMap<Vec<i32>, u64> = HashMap::new();
        for _ in 0..self.samples {
            let ordering = factory.generate(self.items, rng)?;
            *counts.entry(ordering).or_insert(0) += 1;
        }

        let distribution: HashMap<Vec<i32>, OrderingStats> = counts
            .into_iter()
            .map(|(ordering, count)| (ordering, OrderingStats::new(count, expected)))
            .collect();

        // Orderings never drawn each deviate by the full expected count.
        let unobserved = orderings.saturating_sub(distribution.len() as u64);
        let observed_ss: f64 = distribution.values().map(|s| s.squared_deviation).sum();
        let sum_squares = observed_ss + unobserved as f64 * expected * expected;

        let max_observed = distribution
            .values()
            .map(|s| s.deviation.abs())
            .fold(0.0_f64, f64::max);
        let max_abs_deviation = if unobserved > 0 {
            max_observed.max(expected)
        } else {
            max_observed
        };

        let report = UniformityReport {
            samples: self.samples,
            items: self.items,
            orderings,
            distinct_observed: distribution.len(),
            expected_count: expected,
            standard_error: (sum_squares / self.samples as f64).sqrt(),
            chi_squared: sum_squares / expected,
            max_abs_deviation,
            tolerance: self.tolerance,
            distribution,
        };

        debug!(
            samples = report.samples,
            items = report.items,
            standard_error = report.standard_error,
            chi_squared = report.chi_squared,
            "Uniformity run complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::ShuffleStrategy;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(8), Some(40_320));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_ordering_stats() {
        let stats = OrderingStats::new(10, 12.5);
        assert_eq!(stats.count, 10);
        assert_relative_eq!(stats.deviation, -2.5);
        assert_relative_eq!(stats.squared_deviation, 6.25);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(UniformityTest::new(0, 5, 1.5).is_err());
        assert!(UniformityTest::new(10, 0, 1.5).is_err());
        assert!(UniformityTest::new(10, MAX_ITEMS + 1, 1.5).is_err());
        assert!(UniformityTest::new(10, 5, 0.0).is_err());
        assert!(UniformityTest::new(10, 5, f64::NAN).is_err());
    }

    #[test]
    fn test_default_configuration() {
        let test = UniformityTest::default();
        assert_eq!(test.samples(), 100_000);
        assert_eq!(test.items(), 5);
        assert_relative_eq!(test.tolerance(), 1.5);
    }

    /// A factory that always returns the identity ordering concentrates every
    /// sample in one cell and must fail.
    #[test]
    fn test_biased_factory_fails() {
        struct Identity;
        impl PermutationFactory for Identity {
            fn generate(&self, size: usize, _rng: &mut ShuffleRng) -> Result<Vec<i32>> {
                Ok((1..=size as i32).collect())
            }
        }

        let test = UniformityTest::new(1_200, 5, 1.5).unwrap();
        let report = test.run(&Identity, &mut ShuffleRng::from_seed(1)).unwrap();

        assert_eq!(report.distinct_observed, 1);
        assert_relative_eq!(report.expected_count, 10.0);
        assert!(report.standard_error > 1.5);
        assert!(!report.passed());
    }

    #[test]
    fn test_single_item() {
        let test = UniformityTest::new(100, 1, 1.5).unwrap();
        let report = test
            .run(&ShuffleStrategy::Specialised, &mut ShuffleRng::from_seed(1))
            .unwrap();

        assert_eq!(report.orderings, 1);
        assert_eq!(report.distinct_observed, 1);
        assert_relative_eq!(report.standard_error, 0.0);
        assert!(report.passed());
    }

    /// With 6 orderings the squared standard error is chi-squared / 6, so a
    /// tolerance of 3.0 bounds chi-squared (5 dof) at 54.
    #[test]
    fn test_small_uniform_run() {
        let test = UniformityTest::new(60_000, 3, 3.0).unwrap();
        let report = test
            .run(&ShuffleStrategy::Durstenfeld, &mut ShuffleRng::from_seed(99))
            .unwrap();

        assert_eq!(report.orderings, 6);
        assert_eq!(report.distinct_observed, 6);
        let total: u64 = report.distribution.values().map(|s| s.count).sum();
        assert_eq!(total, 60_000);
        assert!(report.passed(), "standard error {}", report.standard_error);
    }

    /// At 8 items each of the 40,320 orderings is expected about 2.5 times,
    /// so several thousand are never drawn, yet the standard error stays near
    /// 1.0 and the run passes.
    #[test]
    fn test_largest_item_count_passes_with_unobserved_orderings() {
        let test = UniformityTest::new(DEFAULT_SAMPLES, MAX_ITEMS, DEFAULT_TOLERANCE).unwrap();
        let report = test
            .run(&ShuffleStrategy::FisherYates, &mut ShuffleRng::from_seed(1))
            .unwrap();

        assert_eq!(report.orderings, 40_320);
        assert!((report.distinct_observed as u64) < report.orderings);
        assert!(report.standard_error < 1.2, "standard error {}", report.standard_error);
        assert!(report.passed());
    }
}
