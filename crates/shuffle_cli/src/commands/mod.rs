//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod generate;
pub mod uniformity;
pub mod verify;

use shuffle_core::config::PermutationConfig;
use shuffle_core::count_from_signed;
use shuffle_core::shuffle::ShuffleStrategy;

use crate::config::CliConfig;
use crate::Result;

/// Merge command-line overrides onto the configured defaults.
pub(crate) fn permutation_config(
    config: &CliConfig,
    count: Option<i64>,
    strategy: Option<ShuffleStrategy>,
    seed: Option<u64>,
) -> Result<PermutationConfig> {
    let count = match count {
        Some(count) => count_from_signed(count)?,
        None => config.count,
    };

    let built = PermutationConfig::builder()
        .count(count)
        .strategy(strategy.unwrap_or(config.strategy))
        .maybe_seed(seed.or(config.seed))
        .build()?;
    Ok(built)
}
