//! shuffle - Command Line Front End for the Permutation Engine
//!
//! Emits a shuffled list of integers, one per line, so the output can be
//! piped through standard tools (`sort -n | uniq -d`) to confirm it.
//!
//! # Commands
//!
//! - `shuffle generate [COUNT]` - Print a permutation of `1..=COUNT`
//! - `shuffle verify [COUNT]` - Generate, radix sort, and check the bijection
//! - `shuffle uniformity` - Run the ordering-frequency test

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::CliConfig;
use shuffle_core::shuffle::ShuffleStrategy;

/// Uniform permutation generator
#[derive(Parser)]
#[command(name = "shuffle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "shuffle.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a shuffled permutation of 1..=COUNT, one value per line
    Generate {
        /// Number of items (defaults to the configured count, 10000)
        #[arg(allow_hyphen_values = true)]
        count: Option<i64>,

        /// Permutation engine (fisher-yates, durstenfeld, specialised)
        #[arg(short, long)]
        strategy: Option<ShuffleStrategy>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a permutation and verify it with the radix sorter
    Verify {
        /// Number of items (defaults to the configured count, 10000)
        #[arg(allow_hyphen_values = true)]
        count: Option<i64>,

        /// Permutation engine (fisher-yates, durstenfeld, specialised)
        #[arg(short, long)]
        strategy: Option<ShuffleStrategy>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that every ordering of a small permutation is equally likely
    Uniformity {
        /// Number of permutations to draw
        #[arg(long)]
        samples: Option<usize>,

        /// Items per permutation
        #[arg(long)]
        items: Option<usize>,

        /// Permutation engine; all engines when omitted
        #[arg(short, long)]
        strategy: Option<ShuffleStrategy>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load_with_env_and_validate(&cli.config)?;

    // Initialise tracing; logs go to stderr so stdout stays machine-readable
    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            count,
            strategy,
            seed,
        } => commands::generate::run(&config, count, strategy, seed),
        Commands::Verify {
            count,
            strategy,
            seed,
        } => commands::verify::run(&config, count, strategy, seed),
        Commands::Uniformity {
            samples,
            items,
            strategy,
        } => commands::uniformity::run(&config, samples, items, strategy),
    }
}
