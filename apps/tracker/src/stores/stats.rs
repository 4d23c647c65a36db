//! Learning stats aggregator store.

use std::sync::Arc;

use progress_core::{DailyLearningBucket, LearningStats, WordRef};

use crate::clock::Clock;
use crate::db::{Durable, SharedDocuments};
use crate::stores::LEARNING_STATS_KEY;

pub struct LearningStatsStore {
    stats: Durable<LearningStats>,
    clock: Arc<dyn Clock>,
}

impl LearningStatsStore {
    pub fn open(documents: SharedDocuments, clock: Arc<dyn Clock>) -> Self {
        let stats: Durable<LearningStats> = Durable::load(documents, LEARNING_STATS_KEY);
        tracing::debug!(total = stats.get().total_words_learned(), "loaded learning stats");
        Self { stats, clock }
    }

    /// Count `word` as learned today. Every call counts; callers decide
    /// when a word has been learned.
    pub fn record_word_learned(&mut self, word: &WordRef) -> DailyLearningBucket {
        let today = self.clock.today();
        let bucket = self.stats.update(|stats| stats.record_word_learned(today));
        tracing::debug!(
            headword = %word.headword,
            today = bucket.words_learned_this_day,
            total = bucket.cumulative_total_at_end_of_day,
            "recorded learned word"
        );
        bucket
    }

    pub fn get_today_stats(&self) -> DailyLearningBucket {
        self.stats.get().today_stats(self.clock.today())
    }

    pub fn get_weekly_stats(&self) -> Vec<DailyLearningBucket> {
        self.stats.get().weekly_stats(self.clock.today())
    }

    pub fn get_recent_stats(&self, days: usize) -> Vec<DailyLearningBucket> {
        self.stats.get().recent_stats(self.clock.today(), days)
    }

    pub fn get_streak_days(&self) -> usize {
        self.stats.get().streak_days(self.clock.today())
    }

    pub fn get_total_words_learned(&self) -> u64 {
        self.stats.get().total_words_learned()
    }

    /// Full aggregate, as persisted.
    pub fn snapshot(&self) -> &LearningStats {
        self.stats.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::db::{DocumentStore, SqliteDocumentStore};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    #[test]
    fn today_follows_clock() {
        let clock = Arc::new(FixedClock::new(date(10)));
        let mut store = LearningStatsStore::open(
            SqliteDocumentStore::open_in_memory().unwrap().into_shared(),
            clock.clone(),
        );
        let word = WordRef::new("apple", "manzana", "fruit");

        store.record_word_learned(&word);
        store.record_word_learned(&word);
        clock.advance_days(1);
        store.record_word_learned(&word);

        let today = store.get_today_stats();
        assert_eq!(today.date, date(11));
        assert_eq!(today.words_learned_this_day, 1);
        assert_eq!(store.get_total_words_learned(), 3);
        assert_eq!(store.get_streak_days(), 2);
    }

    #[test]
    fn weekly_ends_today() {
        let clock = Arc::new(FixedClock::new(date(10)));
        let store = LearningStatsStore::open(
            SqliteDocumentStore::open_in_memory().unwrap().into_shared(),
            clock,
        );
        let week = store.get_weekly_stats();
        assert_eq!(week.len(), 7);
        assert_eq!(week.first().map(|b| b.date), Some(date(4)));
        assert_eq!(week.last().map(|b| b.date), Some(date(10)));
        assert_eq!(store.get_recent_stats(30).len(), 30);
    }

    #[test]
    fn inconsistent_document_starts_empty() {
        let repo = SqliteDocumentStore::open_in_memory().unwrap();
        repo.save_document(
            LEARNING_STATS_KEY,
            r#"{"dailyStats":[{"date":"2024-09-01","wordsLearned":2,"totalWordsLearned":2}],"totalWordsLearned":9}"#,
        )
        .unwrap();

        let clock = Arc::new(FixedClock::new(date(10)));
        let store = LearningStatsStore::open(repo.into_shared(), clock);
        assert_eq!(store.get_total_words_learned(), 0);
        assert!(store.snapshot().buckets().is_empty());
    }
}
