//! # Configuration
//!
//! Initial interpreter state and dialect settings, read from YAML.
//!
//! ```yaml
//! initial-tempo: 120
//! initial-length: 4
//! unpitched-labels: [X, noise, miscellaneous, sk-5]
//! rest-timing: default-length
//! ```
//!
//! Every key is optional; missing keys take the values of [`Config::default`],
//! which is the state a track starts in when no directive has been seen.

use crate::ast::NoteLength;
use crate::error::MmlError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_TEMPO: u32 = 120;
pub const DEFAULT_LENGTH: u32 = 4;
pub const DEFAULT_UNPITCHED_LABELS: [&str; 4] = ["X", "noise", "miscellaneous", "sk-5"];

/// How `R:<n>` rests are timed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestTiming {
    /// Rests last one prevailing `LENGTH`, like every other event
    #[default]
    DefaultLength,
    /// Rests use their own denominator when it is a supported note value
    OwnLength,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub initial_tempo: u32,
    pub initial_length: u32,
    /// Labels whose payload is a sample name rather than a pitch
    pub unpitched_labels: Vec<String>,
    pub rest_timing: RestTiming,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_tempo: DEFAULT_TEMPO,
            initial_length: DEFAULT_LENGTH,
            unpitched_labels: DEFAULT_UNPITCHED_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rest_timing: RestTiming::default(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    initial_tempo: Option<u32>,
    initial_length: Option<u32>,
    unpitched_labels: Option<Vec<String>>,
    rest_timing: Option<RestTiming>,
}

impl Config {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml(content: &str) -> Result<Self, MmlError> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| MmlError::ConfigError(e.to_string()))?;

        let defaults = Self::default();
        let config = Self {
            initial_tempo: raw.initial_tempo.unwrap_or(defaults.initial_tempo),
            initial_length: raw.initial_length.unwrap_or(defaults.initial_length),
            unpitched_labels: raw.unpitched_labels.unwrap_or(defaults.unpitched_labels),
            rest_timing: raw.rest_timing.unwrap_or(defaults.rest_timing),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MmlError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MmlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), MmlError> {
        if self.initial_tempo == 0 {
            return Err(MmlError::ConfigError(
                "initial-tempo must be positive".to_string(),
            ));
        }
        if NoteLength::from_denominator(u64::from(self.initial_length)).is_none() {
            return Err(MmlError::ConfigError(format!(
                "initial-length must be one of 1, 2, 4, 8, 16, 32 (got {})",
                self.initial_length
            )));
        }
        if let Some(label) = self.unpitched_labels.iter().find(|l| l.is_empty() || l.contains(':')) {
            return Err(MmlError::ConfigError(format!(
                "Invalid unpitched label '{}'",
                label
            )));
        }
        Ok(())
    }

    pub fn is_unpitched(&self, label: &str) -> bool {
        self.unpitched_labels.iter().any(|l| l == label)
    }
}
