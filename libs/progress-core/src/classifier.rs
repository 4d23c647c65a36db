//! Difficulty classifier seam.

use std::collections::{HashMap, VecDeque};

/// Decides whether a word is currently hard for the learner.
pub trait DifficultyClassifier: Send {
    /// Feed one attempt outcome.
    fn track_word_attempt(&mut self, headword: &str, is_correct: bool);

    /// Current verdict for the word.
    fn is_difficult(&self, headword: &str) -> bool;

    /// Forget everything tracked for the word.
    fn reset_word_stats(&mut self, headword: &str);
}

/// Flags a word as difficult when too many of its recent attempts failed.
///
/// Memory-only: the verdict is rebuilt from attempts seen by this process.
#[derive(Debug, Clone)]
pub struct RecentErrorClassifier {
    pub window: usize,
    pub max_recent_errors: usize,
    history: HashMap<String, VecDeque<bool>>,
}

impl Default for RecentErrorClassifier {
    fn default() -> Self {
        Self::new(5, 2)
    }
}

impl RecentErrorClassifier {
    pub fn new(window: usize, max_recent_errors: usize) -> Self {
        Self {
            window: window.max(1),
            max_recent_errors,
            history: HashMap::new(),
        }
    }

    fn recent_errors(&self, headword: &str) -> usize {
        self.history
            .get(headword)
            .map(|outcomes| outcomes.iter().filter(|correct| !**correct).count())
            .unwrap_or(0)
    }
}

impl DifficultyClassifier for RecentErrorClassifier {
    fn track_word_attempt(&mut self, headword: &str, is_correct: bool) {
        let outcomes = self.history.entry(headword.to_string()).or_default();
        if outcomes.len() == self.window {
            outcomes.pop_front();
        }
        outcomes.push_back(is_correct);
    }

    fn is_difficult(&self, headword: &str) -> bool {
        self.recent_errors(headword) >= self.max_recent_errors
    }

    fn reset_word_stats(&mut self, headword: &str) {
        self.history.remove(headword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_word_is_not_difficult() {
        let classifier = RecentErrorClassifier::default();
        assert!(!classifier.is_difficult("apple"));
    }

    #[test]
    fn two_recent_errors_make_word_difficult() {
        let mut classifier = RecentErrorClassifier::default();
        classifier.track_word_attempt("apple", false);
        assert!(!classifier.is_difficult("apple"));
        classifier.track_word_attempt("apple", false);
        assert!(classifier.is_difficult("apple"));
    }

    #[test]
    fn old_errors_slide_out_of_window() {
        let mut classifier = RecentErrorClassifier::new(3, 2);
        classifier.track_word_attempt("apple", false);
        classifier.track_word_attempt("apple", false);
        assert!(classifier.is_difficult("apple"));

        classifier.track_word_attempt("apple", true);
        classifier.track_word_attempt("apple", true);
        assert!(!classifier.is_difficult("apple"));
    }

    #[test]
    fn reset_forgets_history() {
        let mut classifier = RecentErrorClassifier::default();
        classifier.track_word_attempt("apple", false);
        classifier.track_word_attempt("apple", false);
        classifier.reset_word_stats("apple");
        assert!(!classifier.is_difficult("apple"));
    }
}
