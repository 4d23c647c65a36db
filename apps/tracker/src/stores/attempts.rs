//! Word attempt store.

use std::sync::Arc;

use progress_core::{AttemptOutcome, AttemptRecord, DifficultyClassifier, MasteryRule, WordAttempts, WordRef};

use crate::clock::Clock;
use crate::db::{Durable, SharedDocuments};
use crate::stores::WORD_ATTEMPTS_KEY;

/// Per-word counters and flags, persisted after every change.
///
/// Reaching mastery is reported through [`AttemptOutcome::newly_learned`];
/// the store itself never touches the other stores.
pub struct WordAttemptStore {
    attempts: Durable<WordAttempts>,
    classifier: Box<dyn DifficultyClassifier>,
    rule: MasteryRule,
    clock: Arc<dyn Clock>,
}

impl WordAttemptStore {
    pub fn open(
        documents: SharedDocuments,
        classifier: Box<dyn DifficultyClassifier>,
        rule: MasteryRule,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let attempts: Durable<WordAttempts> = Durable::load(documents, WORD_ATTEMPTS_KEY);
        tracing::debug!(words = attempts.get().len(), "loaded word attempts");
        Self {
            attempts,
            classifier,
            rule,
            clock,
        }
    }

    pub fn record_attempt(&mut self, word: &WordRef, is_correct: bool) -> AttemptOutcome {
        let today = self.clock.today();
        let rule = &self.rule;
        let classifier = self.classifier.as_mut();
        let outcome = self
            .attempts
            .update(|attempts| attempts.record_attempt(&word.headword, is_correct, today, rule, classifier));

        tracing::debug!(
            headword = %word.headword,
            is_correct,
            correct = outcome.record.correct_attempts,
            incorrect = outcome.record.incorrect_attempts,
            "recorded attempt"
        );
        if outcome.newly_learned {
            tracing::info!(headword = %word.headword, "word mastered");
        }
        outcome
    }

    pub fn get_stats(&self, headword: &str) -> Option<AttemptRecord> {
        self.attempts.get().get(headword).copied()
    }

    pub fn get_difficult_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.attempts.get().difficult_words(candidates)
    }

    pub fn get_learned_words<'a>(&self, candidates: &'a [WordRef]) -> Vec<&'a WordRef> {
        self.attempts.get().learned_words(candidates)
    }

    /// Forget a word's history here and in the classifier.
    pub fn reset_word_stats(&mut self, headword: &str) {
        let removed = self.attempts.update(|attempts| attempts.remove(headword));
        self.classifier.reset_word_stats(headword);
        tracing::debug!(headword, existed = removed.is_some(), "reset word stats");
    }

    pub fn attempted_count(&self) -> usize {
        self.attempts.get().len()
    }

    pub fn learned_count(&self) -> usize {
        self.attempts.get().learned_count()
    }
}
