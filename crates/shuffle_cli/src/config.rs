//! CLI configuration management.
//!
//! Loads defaults for the `shuffle` commands from a TOML file, applies
//! `SHUFFLE_*` environment variable overrides, and validates the result.
//!
//! ```toml
//! count = 10000
//! strategy = "specialised"
//! seed = 42
//! log_level = "info"
//!
//! [uniformity]
//! samples = 100000
//! items = 5
//! tolerance = 1.5
//! ```

use std::path::Path;

use serde::Deserialize;
use shuffle_core::config::DEFAULT_COUNT;
use shuffle_core::shuffle::{ShuffleStrategy, MAX_PERMUTATION_LEN};
use shuffle_core::verify::uniformity::{
    DEFAULT_ITEMS, DEFAULT_SAMPLES, DEFAULT_TOLERANCE, MAX_ITEMS,
};

/// Uniformity command defaults
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct UniformityConfig {
    /// Permutations drawn per run
    pub samples: usize,
    /// Items per permutation
    pub items: usize,
    /// Standard error tolerance
    pub tolerance: f64,
}

impl Default for UniformityConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            items: DEFAULT_ITEMS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Permutation size when none is given on the command line
    #[serde(default = "default_count")]
    pub count: usize,

    /// Permutation engine
    #[serde(default)]
    pub strategy: ShuffleStrategy,

    /// Optional seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Uniformity command defaults
    #[serde(default)]
    pub uniformity: UniformityConfig,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            strategy: ShuffleStrategy::default(),
            seed: None,
            log_level: default_log_level(),
            uniformity: UniformityConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        if let Ok(count) = std::env::var("SHUFFLE_COUNT") {
            self.count = count
                .parse()
                .map_err(|_| ConfigError::Parse(format!("SHUFFLE_COUNT '{}' is not a count", count)))?;
        }

        if let Ok(strategy) = std::env::var("SHUFFLE_STRATEGY") {
            self.strategy = strategy
                .parse()
                .map_err(|e: shuffle_core::ShuffleError| ConfigError::Parse(e.to_string()))?;
        }

        if let Ok(seed) = std::env::var("SHUFFLE_SEED") {
            self.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Parse(format!("SHUFFLE_SEED '{}' is not a u64", seed)))?,
            );
        }

        if let Ok(log_level) = std::env::var("SHUFFLE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.count > MAX_PERMUTATION_LEN {
            errors.push(format!(
                "count {} exceeds maximum allowed ({})",
                self.count, MAX_PERMUTATION_LEN
            ));
        }

        if self.uniformity.samples == 0 {
            errors.push("uniformity.samples must be greater than 0".to_string());
        }

        if self.uniformity.items == 0 || self.uniformity.items > MAX_ITEMS {
            errors.push(format!(
                "uniformity.items {} must be in [1, {}]",
                self.uniformity.items, MAX_ITEMS
            ));
        }

        if self.uniformity.tolerance.is_nan() || self.uniformity.tolerance <= 0.0 {
            errors.push("uniformity.tolerance must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file or environment
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
