//! Date utilities for daily reset hour handling and day windows.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};

/// Get the study day a local timestamp belongs to.
///
/// Before `daily_reset_hour` the study day is still "yesterday", so late
/// sessions count towards the previous day.
pub fn adjusted_date<Tz: TimeZone>(now: &DateTime<Tz>, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now.clone() - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Get adjusted "today" based on daily_reset_hour.
pub fn get_adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    adjusted_date(&Local::now(), daily_reset_hour)
}

/// Format a date as YYYY-MM-DD.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The `days` calendar days ending at `end`, oldest first.
///
/// The window is cut at the earliest representable date.
pub fn trailing_days(end: NaiveDate, days: usize) -> impl Iterator<Item = NaiveDate> {
    let available = (end - NaiveDate::MIN).num_days() + 1;
    let days = i64::try_from(days).map_or(available, |days| days.min(available));
    (0..days).rev().map(move |offset| end - Duration::days(offset))
}
