//! Common test utilities for integration tests.
//!
//! Every context shares one in-memory database between the trackers it
//! builds, so building a second tracker simulates a process restart.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use chrono::NaiveDate;
use vocab_tracker_lib::clock::FixedClock;
use vocab_tracker_lib::config::TrackerConfig;
use vocab_tracker_lib::db::{SharedDocuments, SqliteDocumentStore};
use vocab_tracker_lib::progress::ProgressTracker;
use vocab_tracker_lib::state::AppState;

pub struct TestContext {
    pub documents: SharedDocuments,
    pub clock: Arc<FixedClock>,
    pub config: TrackerConfig,
}

impl TestContext {
    pub fn new(today: NaiveDate) -> Self {
        let documents = SqliteDocumentStore::open_in_memory()
            .expect("Failed to open in-memory database")
            .into_shared();
        Self {
            documents,
            clock: Arc::new(FixedClock::new(today)),
            config: TrackerConfig::default(),
        }
    }

    /// Build a tracker over the shared database, as a fresh process would.
    pub fn tracker(&self) -> ProgressTracker {
        AppState::with_parts(self.config.clone(), self.documents.clone(), self.clock.clone()).tracker
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
