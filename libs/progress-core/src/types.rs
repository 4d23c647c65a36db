//! Core types for vocabulary progress tracking.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, Result};

/// A vocabulary entry as supplied by the static word lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRef {
    pub headword: String,
    pub translation: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl WordRef {
    pub fn new(headword: impl Into<String>, translation: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            translation: translation.into(),
            unit: unit.into(),
            section: None,
        }
    }
}

/// Per-word attempt history, keyed by headword in the attempt map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub correct_attempts: u32,
    pub incorrect_attempts: u32,
    pub last_attempt_date: NaiveDate,
    pub is_learned: bool,
    pub is_difficult: bool,
}

impl AttemptRecord {
    /// Fresh record for a word attempted for the first time on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            correct_attempts: 0,
            incorrect_attempts: 0,
            last_attempt_date: date,
            is_learned: false,
            is_difficult: false,
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.correct_attempts + self.incorrect_attempts
    }

    /// Lifetime share of correct attempts, 0.0 when never attempted.
    pub fn accuracy(&self) -> f64 {
        match self.total_attempts() {
            0 => 0.0,
            total => f64::from(self.correct_attempts) / f64::from(total),
        }
    }
}

/// Threshold a word's lifetime counts must meet to become learned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryRule {
    pub min_correct_attempts: u32,
    pub min_accuracy: f64,
}

impl Default for MasteryRule {
    fn default() -> Self {
        Self {
            min_correct_attempts: 3,
            min_accuracy: 0.7,
        }
    }
}

impl MasteryRule {
    pub fn new(min_correct_attempts: u32, min_accuracy: f64) -> Result<Self> {
        if min_correct_attempts == 0 {
            return Err(ProgressError::InvalidMinCorrect(min_correct_attempts));
        }
        if !(min_accuracy > 0.0 && min_accuracy <= 1.0) {
            return Err(ProgressError::InvalidAccuracy(min_accuracy));
        }
        Ok(Self {
            min_correct_attempts,
            min_accuracy,
        })
    }

    /// Whether a record's cumulative counts satisfy the rule.
    pub fn is_satisfied_by(&self, record: &AttemptRecord) -> bool {
        record.correct_attempts >= self.min_correct_attempts
            && record.accuracy() >= self.min_accuracy
    }
}

/// Rotation state of one curriculum unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitRotationState {
    pub total_words: usize,
    pub seen_headwords: HashSet<String>,
}

/// Seen/total progress through a unit's current cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitProgress {
    pub seen_count: usize,
    pub total_count: usize,
    pub percentage: u32,
}

/// What the rotation tracker hands out right after a cycle reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    /// The first supplied word of the unit.
    FirstAfterReset,
    /// A uniformly random word of the refreshed pool.
    ShuffledCycle,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::FirstAfterReset
    }
}

impl RotationPolicy {
    /// Get the policy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstAfterReset => "first_after_reset",
            Self::ShuffledCycle => "shuffled_cycle",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "first_after_reset" => Ok(Self::FirstAfterReset),
            "shuffled_cycle" => Ok(Self::ShuffledCycle),
            other => Err(ProgressError::UnknownRotationPolicy(other.to_string())),
        }
    }
}

/// Learning volume of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLearningBucket {
    pub date: NaiveDate,
    #[serde(rename = "wordsLearned")]
    pub words_learned_this_day: u32,
    #[serde(rename = "totalWordsLearned")]
    pub cumulative_total_at_end_of_day: u64,
}

impl DailyLearningBucket {
    /// A bucket for a day on which nothing was learned.
    pub fn empty(date: NaiveDate, cumulative_total: u64) -> Self {
        Self {
            date,
            words_learned_this_day: 0,
            cumulative_total_at_end_of_day: cumulative_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn record(correct: u32, incorrect: u32) -> AttemptRecord {
        AttemptRecord {
            correct_attempts: correct,
            incorrect_attempts: incorrect,
            ..AttemptRecord::new(day())
        }
    }

    #[test]
    fn mastery_needs_three_correct() {
        let rule = MasteryRule::default();
        assert!(!rule.is_satisfied_by(&record(2, 0)));
        assert!(rule.is_satisfied_by(&record(3, 0)));
    }

    #[test]
    fn mastery_needs_seventy_percent() {
        let rule = MasteryRule::default();
        assert!(!rule.is_satisfied_by(&record(2, 1)));
        assert!(rule.is_satisfied_by(&record(3, 1)));
        assert!(rule.is_satisfied_by(&record(7, 3)));
        assert!(!rule.is_satisfied_by(&record(6, 3)));
    }

    #[test]
    fn mastery_rule_rejects_bad_settings() {
        assert_eq!(MasteryRule::new(0, 0.7), Err(ProgressError::InvalidMinCorrect(0)));
        assert_eq!(MasteryRule::new(3, 0.0), Err(ProgressError::InvalidAccuracy(0.0)));
        assert_eq!(MasteryRule::new(3, 1.5), Err(ProgressError::InvalidAccuracy(1.5)));
        assert!(MasteryRule::new(5, 1.0).is_ok());
    }

    #[test]
    fn accuracy_of_unattempted_record_is_zero() {
        assert_eq!(AttemptRecord::new(day()).accuracy(), 0.0);
    }

    #[test]
    fn rotation_policy_names() {
        for policy in [RotationPolicy::FirstAfterReset, RotationPolicy::ShuffledCycle] {
            assert_eq!(RotationPolicy::parse(policy.as_str()), Ok(policy));
        }
        assert!(RotationPolicy::parse("random").is_err());
    }

    #[test]
    fn attempt_record_uses_camel_case_fields() {
        let json = serde_json::to_value(record(3, 1)).unwrap();
        assert_eq!(json["correctAttempts"], 3);
        assert_eq!(json["incorrectAttempts"], 1);
        assert_eq!(json["lastAttemptDate"], "2024-03-01");
        assert_eq!(json["isLearned"], false);
    }
}
