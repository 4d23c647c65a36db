//! Durable stores: each owns exactly one persisted document.

pub mod attempts;
pub mod stats;

pub use attempts::WordAttemptStore;
pub use stats::LearningStatsStore;

/// Document key of the word attempt map.
pub const WORD_ATTEMPTS_KEY: &str = "word_attempts";

/// Document key of the learning stats root.
pub const LEARNING_STATS_KEY: &str = "learning_stats";
