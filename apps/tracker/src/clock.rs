//! Source of "today" for the stores.

use chrono::NaiveDate;
use progress_core::dates::get_adjusted_today;
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock shifted by the configured daily reset hour.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub daily_reset_hour: u32,
}

impl SystemClock {
    pub fn new(daily_reset_hour: u32) -> Self {
        Self { daily_reset_hour }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        get_adjusted_today(self.daily_reset_hour)
    }
}

/// Manually driven clock (for testing).
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        *self.today.lock().unwrap_or_else(|e| e.into_inner()) = today;
    }

    pub fn advance_days(&self, days: i64) {
        let mut today = self.today.lock().unwrap_or_else(|e| e.into_inner());
        *today = *today + chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap_or_else(|e| e.into_inner())
    }
}
