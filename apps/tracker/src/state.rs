//! Application state: the composition root that builds each store once.

use std::sync::Arc;

use progress_core::{RecentErrorClassifier, UnitRotationTracker};

use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::db::{DbError, SharedDocuments, SqliteDocumentStore};
use crate::progress::ProgressTracker;
use crate::stores::{LearningStatsStore, WordAttemptStore};

/// Global application state.
pub struct AppState {
    pub config: TrackerConfig,
    pub tracker: ProgressTracker,
}

impl AppState {
    /// Open the database named by `config` and build every store.
    pub fn open(config: TrackerConfig) -> Result<Self, DbError> {
        std::fs::create_dir_all(&config.data_dir)?;
        let path = config.database_path();
        tracing::info!(path = %path.display(), "opening progress database");

        let documents = SqliteDocumentStore::open(&path)?.into_shared();
        let clock = Arc::new(SystemClock::new(config.daily_reset_hour));
        Ok(Self::with_parts(config, documents, clock))
    }

    /// Build the stores over an existing document store and clock.
    pub fn with_parts(config: TrackerConfig, documents: SharedDocuments, clock: Arc<dyn Clock>) -> Self {
        let attempts = WordAttemptStore::open(
            documents.clone(),
            Box::new(RecentErrorClassifier::default()),
            config.mastery,
            clock.clone(),
        );
        let stats = LearningStatsStore::open(documents, clock);
        let rotation = UnitRotationTracker::new(config.rotation_policy);

        Self {
            tracker: ProgressTracker::new(attempts, rotation, stats),
            config,
        }
    }
}
