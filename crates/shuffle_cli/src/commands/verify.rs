//! Verify command implementation
//!
//! Generates a permutation, radix sorts it, and checks it equals `1..=N`.

use shuffle_core::shuffle::ShuffleStrategy;
use shuffle_core::verify::check_bijection;
use tracing::{error, info};

use super::permutation_config;
use crate::config::CliConfig;
use crate::Result;

/// Run the verify command
pub fn run(
    config: &CliConfig,
    count: Option<i64>,
    strategy: Option<ShuffleStrategy>,
    seed: Option<u64>,
) -> Result<()> {
    let request = permutation_config(config, count, strategy, seed)?;
    info!(
        count = request.count(),
        strategy = %request.strategy(),
        "Verifying permutation"
    );

    let values = request.generate()?;
    if let Err(e) = check_bijection(&values) {
        error!("{}", e);
        return Err(e.into());
    }

    println!(
        "ok: {} values from {} form a permutation of 1..={}",
        values.len(),
        request.strategy(),
        values.len()
    );
    Ok(())
}
