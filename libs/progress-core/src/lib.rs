//! Core vocabulary progress library shared by the tracker application.
//!
//! Provides:
//! - Per-word attempt counters and the mastery rule
//! - Per-unit rotation sampling (process-scoped, never persisted)
//! - Day-bucketed learned-word aggregation
//! - The difficulty classifier seam
//! - Shared types (WordRef, AttemptRecord, DailyLearningBucket, etc.)

pub mod attempts;
pub mod classifier;
pub mod dates;
pub mod error;
pub mod rotation;
pub mod stats;
pub mod types;

pub use attempts::{AttemptOutcome, WordAttempts};
pub use classifier::{DifficultyClassifier, RecentErrorClassifier};
pub use error::{ProgressError, Result};
pub use rotation::UnitRotationTracker;
pub use stats::LearningStats;
pub use types::{
    AttemptRecord, DailyLearningBucket, MasteryRule, RotationPolicy, UnitProgress,
    UnitRotationState, WordRef,
};
