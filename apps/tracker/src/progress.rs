//! The progress surface game screens call into.
//!
//! Owns one instance of each store. Mastery side effects are applied here,
//! after the attempt store returns: a word that crosses the threshold is
//! counted once in the learning stats and marked seen in its unit. This is
//! the only path that increments the global learned total on an answer.

use progress_core::{
    AttemptOutcome, AttemptRecord, DailyLearningBucket, UnitProgress, UnitRotationTracker, WordRef,
};

use crate::stores::{LearningStatsStore, WordAttemptStore};

pub struct ProgressTracker {
    attempts: WordAttemptStore,
    rotation: UnitRotationTracker,
    stats: LearningStatsStore,
}

impl ProgressTracker {
    pub fn new(
        attempts: WordAttemptStore,
        rotation: UnitRotationTracker,
        stats: LearningStatsStore,
    ) -> Self {
        Self {
            attempts,
            rotation,
            stats,
        }
    }

    // ===== Word attempts =====

    /// Record an answer and apply mastery side effects.
    pub fn record_attempt(&mut self, word: &WordRef, is_correct: bool) -> AttemptOutcome {
        let outcome = self.attempts.record_attempt(word, is_correct);
        if outcome.newly_learned {
            self.stats.record_word_learned(word);
            self.rotation.mark_word_as_seen(word);
        }
        outcome
    }

    pub fn get_stats(&self, headword: &str) -> Option<AttemptRecord> {
        self.attempts.get_stats(headword)
    }

    pub fn get_difficult_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.attempts.get_difficult_words(candidates)
    }

    pub fn get_learned_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.attempts.get_learned_words(candidates)
    }

    pub fn reset_word_stats(&mut self, headword: &str) {
        self.attempts.reset_word_stats(headword);
    }

    // ===== Unit rotation =====

    pub fn initialize_unit(&mut self, words: &[WordRef], unit: &str) {
        if self.rotation.initialize_unit(words, unit) {
            tracing::debug!(unit, total = self.rotation.get_progress(unit).total_count, "initialized unit");
        }
    }

    pub fn get_next_word<'a>(&mut self, words: &'a [WordRef], unit: &str) -> Option<&'a WordRef> {
        let cycle_done = self.rotation.get_unseen_words(words, unit).is_empty();
        let word = self.rotation.get_next_word(words, unit);
        if cycle_done && word.is_some() {
            tracing::info!(unit, "unit cycle complete, starting over");
        }
        word
    }

    pub fn get_next_words<'a>(&mut self, words: &'a [WordRef], unit: &str, count: usize) -> Vec<&'a WordRef> {
        self.rotation.get_next_words(words, unit, count)
    }

    pub fn get_progress(&self, unit: &str) -> UnitProgress {
        self.rotation.get_progress(unit)
    }

    pub fn mark_word_as_seen(&mut self, word: &WordRef) {
        if !self.rotation.mark_word_as_seen(word) {
            tracing::debug!(headword = %word.headword, unit = %word.unit, "unit not initialized, seen mark dropped");
        }
    }

    pub fn is_word_seen(&self, word: &WordRef) -> bool {
        self.rotation.is_word_seen(word)
    }

    pub fn reset_unit(&mut self, unit: &str) {
        self.rotation.reset_unit(unit);
    }

    // ===== Learning stats =====

    pub fn get_today_stats(&self) -> DailyLearningBucket {
        self.stats.get_today_stats()
    }

    pub fn get_weekly_stats(&self) -> Vec<DailyLearningBucket> {
        self.stats.get_weekly_stats()
    }

    pub fn get_recent_stats(&self, days: usize) -> Vec<DailyLearningBucket> {
        self.stats.get_recent_stats(days)
    }

    pub fn get_streak_days(&self) -> usize {
        self.stats.get_streak_days()
    }

    pub fn get_total_words_learned(&self) -> u64 {
        self.stats.get_total_words_learned()
    }

    // ===== Store access =====

    pub fn attempts(&self) -> &WordAttemptStore {
        &self.attempts
    }

    pub fn stats(&self) -> &LearningStatsStore {
        &self.stats
    }
}
