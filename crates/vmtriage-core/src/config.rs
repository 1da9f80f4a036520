//! Generation settings loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid configuration
//! that reproduces the stock run: 15 records starting at 08:00 with 5–45
//! minute gaps, written to `mock_voicemails.json`.
//!
//! ```toml
//! count = 40
//! output = "fixtures/voicemails.json"
//! seed = 7
//! start_time = "07:30"
//! min_increment_minutes = 2
//! max_increment_minutes = 20
//! ```

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use vmtriage_contracts::error::{FixtureError, FixtureResult};

use crate::generator::ID_SPACE;

const START_TIME_FORMAT: &str = "%H:%M";

fn default_count() -> usize {
    15
}

fn default_output() -> PathBuf {
    PathBuf::from("mock_voicemails.json")
}

fn default_start_time() -> String {
    "08:00".to_string()
}

fn default_min_increment() -> u32 {
    5
}

fn default_max_increment() -> u32 {
    45
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Number of records to generate.
    ///
    /// The clock holds at 11:59 PM once it reaches end of day, so in a long
    /// run every later record is stamped "11:59 PM".
    #[serde(default = "default_count")]
    pub count: usize,

    /// Artifact path. Overwritten on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Seed for the random source. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Time-of-day anchor for the simulated clock, 24-hour `HH:MM`.
    #[serde(default = "default_start_time")]
    pub start_time: String,

    #[serde(default = "default_min_increment")]
    pub min_increment_minutes: u32,

    #[serde(default = "default_max_increment")]
    pub max_increment_minutes: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            output: default_output(),
            seed: None,
            start_time: default_start_time(),
            min_increment_minutes: default_min_increment(),
            max_increment_minutes: default_max_increment(),
        }
    }
}

impl GenerationConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `FixtureError::ConfigError` if the TOML is malformed, contains
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(s: &str) -> FixtureResult<Self> {
        let config: GenerationConfig =
            toml::from_str(s).map_err(|e| FixtureError::ConfigError {
                reason: format!("failed to parse generation TOML: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as generation configuration.
    pub fn from_file(path: &Path) -> FixtureResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FixtureError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check the settings are internally consistent.
    pub fn validate(&self) -> FixtureResult<()> {
        self.anchor_time()?;

        if self.min_increment_minutes > self.max_increment_minutes {
            return Err(FixtureError::ConfigError {
                reason: format!(
                    "min_increment_minutes ({}) exceeds max_increment_minutes ({})",
                    self.min_increment_minutes, self.max_increment_minutes
                ),
            });
        }

        if self.count > ID_SPACE {
            return Err(FixtureError::ConfigError {
                reason: format!(
                    "count {} exceeds the {} distinct record ids available",
                    self.count, ID_SPACE
                ),
            });
        }

        Ok(())
    }

    /// The parsed clock anchor.
    pub fn anchor_time(&self) -> FixtureResult<NaiveTime> {
        NaiveTime::parse_from_str(&self.start_time, START_TIME_FORMAT).map_err(|e| {
            FixtureError::ConfigError {
                reason: format!(
                    "start_time '{}' is not a 24-hour HH:MM time: {}",
                    self.start_time, e
                ),
            }
        })
    }

    /// Inclusive range the per-record clock advance is sampled from.
    pub fn increment_range(&self) -> RangeInclusive<u32> {
        self.min_increment_minutes..=self.max_increment_minutes
    }
}
