mod common;

use common::{date, TestContext};
use pretty_assertions::assert_eq;
use progress_core::{DailyLearningBucket, WordRef};
use vocab_tracker_lib::progress::ProgressTracker;

fn master(tracker: &mut ProgressTracker, word: &WordRef) {
    for _ in 0..3 {
        tracker.record_attempt(word, true);
    }
}

fn words(prefix: &str, count: usize) -> Vec<WordRef> {
    (0..count)
        .map(|i| WordRef::new(format!("{prefix}{i}"), format!("t{i}"), "unit-1"))
        .collect()
}

#[test]
fn five_learned_today_on_top_of_prior_total() {
    let ctx = TestContext::new(date(2024, 10, 4));
    let mut tracker = ctx.tracker();

    for word in &words("early", 2) {
        master(&mut tracker, word);
    }
    ctx.clock.set(date(2024, 10, 7));
    for word in &words("today", 5) {
        master(&mut tracker, word);
    }

    assert_eq!(
        tracker.get_today_stats(),
        DailyLearningBucket {
            date: date(2024, 10, 7),
            words_learned_this_day: 5,
            cumulative_total_at_end_of_day: 7,
        }
    );

    let week = tracker.get_weekly_stats();
    let summary: Vec<_> = week
        .iter()
        .map(|b| (b.date, b.words_learned_this_day, b.cumulative_total_at_end_of_day))
        .collect();
    assert_eq!(
        summary,
        vec![
            (date(2024, 10, 1), 0, 0),
            (date(2024, 10, 2), 0, 0),
            (date(2024, 10, 3), 0, 0),
            (date(2024, 10, 4), 2, 2),
            (date(2024, 10, 5), 0, 2),
            (date(2024, 10, 6), 0, 2),
            (date(2024, 10, 7), 5, 7),
        ]
    );
}

#[test]
fn today_without_activity_reports_current_total() {
    let ctx = TestContext::new(date(2024, 10, 4));
    let mut tracker = ctx.tracker();
    master(&mut tracker, &words("w", 1)[0]);

    ctx.clock.advance_days(2);
    assert_eq!(
        tracker.get_today_stats(),
        DailyLearningBucket::empty(date(2024, 10, 6), 1)
    );
    assert_eq!(tracker.get_streak_days(), 0);
}

#[test]
fn streak_spans_consecutive_days() {
    let ctx = TestContext::new(date(2024, 10, 4));
    let mut tracker = ctx.tracker();
    for word in &words("w", 3) {
        master(&mut tracker, word);
        ctx.clock.advance_days(1);
    }

    // Nothing learned yet on the 7th, the streak through the 6th still counts
    assert_eq!(tracker.get_streak_days(), 3);
    assert_eq!(tracker.get_recent_stats(10).len(), 10);
}
