//! Generate command implementation
//!
//! Prints a permutation of `1..=N`, one integer per line.

use std::io::{self, BufWriter, Write};

use shuffle_core::shuffle::ShuffleStrategy;
use tracing::info;

use super::permutation_config;
use crate::config::CliConfig;
use crate::Result;

/// Run the generate command
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
        "Generating permutation"
    );

    let values = request.generate()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_values(&mut out, &values)?;
    out.flush()?;

    info!("Generation complete");
    Ok(())
}

/// Write one value per line.
pub(crate) fn write_values<W: Write>(out: &mut W, values: &[i32]) -> io::Result<()> {
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_values_one_per_line() {
        let mut buffer = Vec::new();
        write_values(&mut buffer, &[3, 1, 2]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "3\n1\n2\n");
    }

    #[test]
    fn test_write_empty() {
        let mut buffer = Vec::new();
        write_values(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
