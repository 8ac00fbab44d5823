//! Uniformity command implementation
//!
//! Runs the ordering-frequency test for one or all strategies and prints a
//! report line per strategy.

use shuffle_core::rng::ShuffleRng;
use shuffle_core::shuffle::ShuffleStrategy;
use shuffle_core::verify::uniformity::MAX_ITEMS;
use shuffle_core::verify::{UniformityReport, UniformityTest};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the uniformity command
pub fn run(
    config: &CliConfig,
    samples: Option<usize>,
    items: Option<usize>,
    strategy: Option<ShuffleStrategy>,
) -> Result<()> {
    if samples == Some(0) {
        return Err(CliError::invalid_argument("--samples must be greater than 0"));
    }
    if let Some(items) = items.filter(|&items| items == 0 || items > MAX_ITEMS) {
        return Err(CliError::invalid_argument(format!(
            "--items {} must be in [1, {}]",
            items, MAX_ITEMS
        )));
    }

    let test = UniformityTest::new(
        samples.unwrap_or(config.uniformity.samples),
        items.unwrap_or(config.uniformity.items),
        config.uniformity.tolerance,
    )?;
    let strategies = match strategy {
        Some(strategy) => vec![strategy],
        None => ShuffleStrategy::ALL.to_vec(),
    };

    info!(
        samples = test.samples(),
        items = test.items(),
        "Starting uniformity check"
    );

    let mut rng = ShuffleRng::from_optional_seed(config.seed);
    let mut failed = Vec::new();
    for strategy in strategies {
        let report = test.run(&strategy, &mut rng)?;
        println!("{}", format_report(strategy, &report));
        if !report.passed() {
            warn!(%strategy, standard_error = report.standard_error, "Uniformity check failed");
            failed.push(strategy.to_string());
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::UniformityFailed(failed.join(", ")))
    }
}

/// One-line summary of a uniformity run.
fn format_report(strategy: ShuffleStrategy, report: &UniformityReport) -> String {
    format!(
        "{:<12} {} samples, {}/{} orderings, expected {:.1}, max dev {:.1}, std err {:.4} (< {}) chi2 {:.1} {}",
        strategy.name(),
        report.samples,
        report.distinct_observed,
        report.orderings,
        report.expected_count,
        report.max_abs_deviation,
        report.standard_error,
        report.tolerance,
        report.chi_squared,
        if report.passed() { "PASS" } else { "FAIL" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report() {
        let test = UniformityTest::new(600, 3, 3.0).unwrap();
        let report = test
            .run(&ShuffleStrategy::Specialised, &mut ShuffleRng::from_seed(4))
            .unwrap();
        let line = format_report(ShuffleStrategy::Specialised, &report);
        assert!(line.starts_with("specialised"));
        assert!(line.contains("600 samples"));
        assert!(line.contains("/6 orderings"));
    }

    #[test]
    fn test_invalid_items_rejected() {
        let err = run(&CliConfig::default(), Some(10), Some(0), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("--items 0")));

        let err = run(&CliConfig::default(), Some(10), Some(9), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(ref msg) if msg.contains("[1, 8]")));
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = run(&CliConfig::default(), Some(0), None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: --samples must be greater than 0"
        );
    }
}
