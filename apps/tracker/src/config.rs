//! Tracker configuration from environment variables.
//!
//! Recognized variables:
//! - VOCAB_DATA_DIR: directory holding the progress database
//! - VOCAB_DAILY_RESET_HOUR: hour (0-23) at which a new study day begins
//! - VOCAB_MASTERY_MIN_CORRECT: correct answers needed to learn a word
//! - VOCAB_MASTERY_MIN_ACCURACY: lifetime accuracy needed to learn a word
//! - VOCAB_ROTATION_POLICY: `first_after_reset` or `shuffled_cycle`

use std::path::PathBuf;

use progress_core::{MasteryRule, ProgressError, RotationPolicy};
use thiserror::Error;

const DATABASE_FILE: &str = "progress.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error(transparent)]
    Progress(#[from] ProgressError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub daily_reset_hour: u32,
    pub mastery: MasteryRule,
    pub rotation_policy: RotationPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            daily_reset_hour: 0,
            mastery: MasteryRule::default(),
            rotation_policy: RotationPolicy::default(),
        }
    }
}

impl TrackerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from any variable lookup; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = lookup("VOCAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let daily_reset_hour = parse_var(&lookup, "VOCAB_DAILY_RESET_HOUR")?
            .unwrap_or(defaults.daily_reset_hour);
        if daily_reset_hour > 23 {
            return Err(ProgressError::InvalidResetHour(daily_reset_hour).into());
        }

        let min_correct = parse_var(&lookup, "VOCAB_MASTERY_MIN_CORRECT")?
            .unwrap_or(defaults.mastery.min_correct_attempts);
        let min_accuracy = parse_var(&lookup, "VOCAB_MASTERY_MIN_ACCURACY")?
            .unwrap_or(defaults.mastery.min_accuracy);
        let mastery = MasteryRule::new(min_correct, min_accuracy)?;

        let rotation_policy = match lookup("VOCAB_ROTATION_POLICY") {
            Some(value) => RotationPolicy::parse(value.trim())?,
            None => defaults.rotation_policy,
        };

        Ok(Self {
            data_dir,
            daily_reset_hour,
            mastery,
            rotation_policy,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-progress")
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(None),
    }
}
