//! Learning statistics commands.

use progress_core::dates::format_date;
use progress_core::DailyLearningBucket;
use serde::Serialize;

use crate::progress::ProgressTracker;

/// Overall learning summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_words_learned: u64,
    pub words_attempted: usize,
    pub words_mastered: usize,
    pub streak_days: usize,
    pub last_updated: Option<String>,
}

pub fn today_stats(tracker: &ProgressTracker) -> DailyLearningBucket {
    tracker.get_today_stats()
}

pub fn weekly_stats(tracker: &ProgressTracker) -> Vec<DailyLearningBucket> {
    tracker.get_weekly_stats()
}

/// Trailing window for a heatmap, 90 days unless given.
pub fn recent_stats(tracker: &ProgressTracker, days: Option<u16>) -> Vec<DailyLearningBucket> {
    tracker.get_recent_stats(days.map_or(90, usize::from))
}

pub fn summary(tracker: &ProgressTracker) -> SummaryResponse {
    SummaryResponse {
        total_words_learned: tracker.get_total_words_learned(),
        words_attempted: tracker.attempts().attempted_count(),
        words_mastered: tracker.attempts().learned_count(),
        streak_days: tracker.get_streak_days(),
        last_updated: tracker.stats().snapshot().last_updated_date().map(format_date),
    }
}
