//! Error types for progress-core.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using ProgressError.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors raised while validating progress settings and stored documents.
#[derive(Debug, Error, PartialEq)]
pub enum ProgressError {
    #[error("mastery rule needs at least one correct attempt, got {0}")]
    InvalidMinCorrect(u32),

    #[error("mastery accuracy must be within (0, 1], got {0}")]
    InvalidAccuracy(f64),

    #[error("daily reset hour must be within 0-23, got {0}")]
    InvalidResetHour(u32),

    #[error("unknown rotation policy: {0}")]
    UnknownRotationPolicy(String),

    #[error("day {0} appears more than once in learning stats")]
    DuplicateStatsDay(NaiveDate),

    #[error("learning stats total {total} does not match the {counted} words in daily buckets")]
    StatsTotalMismatch { total: u64, counted: u64 },
}
