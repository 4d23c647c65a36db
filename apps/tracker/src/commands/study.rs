//! Answer recording and per-word lookups.

use progress_core::{AttemptOutcome, AttemptRecord, WordRef};
use serde::Serialize;

use super::words::{find_word, CommandError};
use crate::progress::ProgressTracker;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResponse {
    pub headword: String,
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
    pub total_words_learned: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStatsResponse {
    pub headword: String,
    pub stats: Option<AttemptRecord>,
}

/// Record one answer for a word of the list.
pub fn submit_attempt(
    tracker: &mut ProgressTracker,
    words: &[WordRef],
    headword: &str,
    is_correct: bool,
) -> Result<AttemptResponse, CommandError> {
    let word = find_word(words, headword)?;
    let outcome = tracker.record_attempt(word, is_correct);
    Ok(AttemptResponse {
        headword: word.headword.clone(),
        outcome,
        total_words_learned: tracker.get_total_words_learned(),
    })
}

pub fn word_stats(tracker: &ProgressTracker, headword: &str) -> WordStatsResponse {
    WordStatsResponse {
        headword: headword.to_string(),
        stats: tracker.get_stats(headword),
    }
}

/// Headwords of the list currently flagged difficult.
pub fn difficult_words(tracker: &ProgressTracker, words: &[WordRef]) -> Vec<String> {
    headwords(tracker.get_difficult_words(words))
}

/// Headwords of the list already learned.
pub fn learned_words(tracker: &ProgressTracker, words: &[WordRef]) -> Vec<String> {
    headwords(tracker.get_learned_words(words))
}

fn headwords(words: Vec<&WordRef>) -> Vec<String> {
    words.into_iter().map(|w| w.headword.clone()).collect()
}
