//! Configuration System
//!
//! Loads run parameters from battle.toml. Only the driver is configurable;
//! skill formulas and thresholds are fixed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "battle.toml";

/// Largest seed a TOML integer can hold
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub population: PopulationConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// How many of each entity to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub humans: usize,
    pub angels: usize,
    pub demons: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            humans: 5,
            angels: 3,
            demons: 3,
        }
    }
}

/// Round loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rounds: u32,
    /// Fixed seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Pause between per-Human updates, in milliseconds
    pub delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            seed: None,
            delay_ms: 0,
        }
    }
}

/// Reporting switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// ANSI colors in the console report
    pub color: bool,
    /// JSONL file receiving one record per conflict
    pub events_path: Option<PathBuf>,
    /// JSON file receiving the final report
    pub report_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            events_path: None,
            report_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the default file, falling back to built-in values if it is missing.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that a conflict can always be staged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.angels == 0 {
            return Err(ConfigError::Invalid("at least one angel is required".into()));
        }
        if self.population.demons == 0 {
            return Err(ConfigError::Invalid("at least one demon is required".into()));
        }
        if let Some(seed) = self.simulation.seed {
            if seed > MAX_SEED {
                return Err(ConfigError::Invalid(format!(
                    "seed {} exceeds the maximum of {}",
                    seed, MAX_SEED
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
