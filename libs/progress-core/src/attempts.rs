//! Per-word attempt counters and mastery detection.
//!
//! The map serializes as a JSON object keyed by headword, which is the
//! document the tracker persists after every mutation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classifier::DifficultyClassifier;
use crate::types::{AttemptRecord, MasteryRule, WordRef};

/// Result of recording one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptOutcome {
    pub record: AttemptRecord,
    /// True only for the attempt that flipped the word to learned.
    pub newly_learned: bool,
}

/// Attempt records keyed by headword.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordAttempts {
    records: BTreeMap<String, AttemptRecord>,
}

impl WordAttempts {
    /// Count one attempt, refresh the difficulty flag, and apply the mastery rule.
    pub fn record_attempt(
        &mut self,
        headword: &str,
        is_correct: bool,
        today: NaiveDate,
        rule: &MasteryRule,
        classifier: &mut dyn DifficultyClassifier,
    ) -> AttemptOutcome {
        let record = self
            .records
            .entry(headword.to_string())
            .or_insert_with(|| AttemptRecord::new(today));

        if is_correct {
            record.correct_attempts += 1;
        } else {
            record.incorrect_attempts += 1;
        }
        record.last_attempt_date = today;

        classifier.track_word_attempt(headword, is_correct);
        record.is_difficult = classifier.is_difficult(headword);

        let newly_learned = !record.is_learned && rule.is_satisfied_by(record);
        if newly_learned {
            record.is_learned = true;
        }

        AttemptOutcome {
            record: *record,
            newly_learned,
        }
    }

    pub fn get(&self, headword: &str) -> Option<&AttemptRecord> {
        self.records.get(headword)
    }

    /// Candidates whose stored record is flagged difficult.
    pub fn difficult_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.filter_by(candidates, |record| record.is_difficult)
    }

    /// Candidates whose stored record is learned.
    pub fn learned_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.filter_by(candidates, |record| record.is_learned)
    }

    /// Drop a word's record, returning it if there was one.
    pub fn remove(&mut self, headword: &str) -> Option<AttemptRecord> {
        self.records.remove(headword)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn learned_count(&self) -> usize {
        self.records.values().filter(|r| r.is_learned).count()
    }

    fn filter_by<'a>(
        &self,
        candidates: &'a [WordRef],
        flag: impl Fn(&AttemptRecord) -> bool,
    ) -> Vec<&'a WordRef> {
        candidates
            .iter()
            .filter(|word| self.records.get(&word.headword).map_or(false, &flag))
            .collect()
    }
}
