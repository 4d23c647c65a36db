//! Day-bucketed learning volume.
//!
//! Only days on which something was learned get a bucket. A day without one
//! inherits the cumulative total of the nearest earlier bucket, so trailing
//! windows are answered in time proportional to the window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::trailing_days;
use crate::error::ProgressError;
use crate::types::DailyLearningBucket;

/// Learned-word totals, persisted as a single document.
///
/// Buckets are kept sorted by date with at most one per day, and the total
/// always equals the sum of the daily counts. Documents breaking either rule
/// are rejected on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredStats")]
pub struct LearningStats {
    #[serde(rename = "dailyStats", default)]
    buckets: Vec<DailyLearningBucket>,
    #[serde(default)]
    total_words_learned: u64,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    last_updated_date: Option<NaiveDate>,
}

/// Unchecked shape of the persisted document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredStats {
    #[serde(default)]
    daily_stats: Vec<DailyLearningBucket>,
    #[serde(default)]
    total_words_learned: u64,
    #[serde(default)]
    last_updated: Option<NaiveDate>,
}

impl TryFrom<StoredStats> for LearningStats {
    type Error = ProgressError;

    fn try_from(stored: StoredStats) -> Result<Self, Self::Error> {
        let mut buckets = stored.daily_stats;
        buckets.sort_by_key(|b| b.date);
        if let Some(pair) = buckets.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(ProgressError::DuplicateStatsDay(pair[0].date));
        }

        let counted: u64 = buckets.iter().map(|b| u64::from(b.words_learned_this_day)).sum();
        if counted != stored.total_words_learned {
            return Err(ProgressError::StatsTotalMismatch {
                total: stored.total_words_learned,
                counted,
            });
        }

        Ok(Self {
            buckets,
            total_words_learned: stored.total_words_learned,
            last_updated_date: stored.last_updated,
        })
    }
}

impl LearningStats {
    /// Count one learned word on `today`. Not idempotent.
    pub fn record_word_learned(&mut self, today: NaiveDate) -> DailyLearningBucket {
        self.total_words_learned += 1;
        let total = self.total_words_learned;

        let index = match self.buckets.binary_search_by_key(&today, |b| b.date) {
            Ok(index) => index,
            Err(index) => {
                self.buckets.insert(index, DailyLearningBucket::empty(today, total));
                index
            }
        };
        let bucket = &mut self.buckets[index];
        bucket.words_learned_this_day += 1;
        bucket.cumulative_total_at_end_of_day = total;
        self.last_updated_date = Some(today);
        *bucket
    }

    /// Today's bucket, or an empty one carrying the current total.
    pub fn today_stats(&self, today: NaiveDate) -> DailyLearningBucket {
        self.bucket(today)
            .copied()
            .unwrap_or_else(|| DailyLearningBucket::empty(today, self.total_words_learned))
    }

    /// The 7 days ending at `today`, oldest first.
    pub fn weekly_stats(&self, today: NaiveDate) -> Vec<DailyLearningBucket> {
        self.recent_stats(today, 7)
    }

    /// The `days` days ending at `today`, oldest first, gaps filled in.
    pub fn recent_stats(&self, today: NaiveDate, days: usize) -> Vec<DailyLearningBucket> {
        let Some(start) = trailing_days(today, days).next() else {
            return Vec::new();
        };

        let first = self.buckets.partition_point(|b| b.date < start);
        let mut carried = first
            .checked_sub(1)
            .map_or(0, |i| self.buckets[i].cumulative_total_at_end_of_day);
        let mut existing = self.buckets[first..].iter().peekable();

        trailing_days(today, days)
            .map(|date| match existing.next_if(|b| b.date == date) {
                Some(bucket) => {
                    carried = bucket.cumulative_total_at_end_of_day;
                    *bucket
                }
                None => DailyLearningBucket::empty(date, carried),
            })
            .collect()
    }

    /// Consecutive days with at least one learned word, ending today.
    ///
    /// A streak that ended yesterday still counts while today is empty.
    pub fn streak_days(&self, today: NaiveDate) -> usize {
        let active = |date: NaiveDate| self.bucket(date).map_or(false, |b| b.words_learned_this_day > 0);

        let mut day = if active(today) { Some(today) } else { today.pred_opt() };
        let mut streak = 0;
        while let Some(current) = day.filter(|d| active(*d)) {
            streak += 1;
            day = current.pred_opt();
        }
        streak
    }

    pub fn total_words_learned(&self) -> u64 {
        self.total_words_learned
    }

    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        self.last_updated_date
    }

    pub fn buckets(&self) -> &[DailyLearningBucket] {
        &self.buckets
    }

    fn bucket(&self, date: NaiveDate) -> Option<&DailyLearningBucket> {
        self.buckets
            .binary_search_by_key(&date, |b| b.date)
            .ok()
            .map(|index| &self.buckets[index])
    }
}
