use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::store::CourseStore;

/// Periodically refetches the catalog so long-lived sessions pick up new proposals.
pub struct RefreshScheduler {
    store: Arc<CourseStore>,
    interval: Duration,
}

impl RefreshScheduler {
    pub fn new(store: Arc<CourseStore>, interval_secs: u64) -> Self {
        Self {
            store,
            interval: Duration::from_secs(interval_secs),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs until the task is aborted. A failed refresh keeps the previous collection.
    pub async fn start(self) {
        info!("Starting refresh scheduler (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            self.store.fetch_courses().await;
            match self.store.error().await {
                None => info!("Auto-refresh completed"),
                Some(e) => tracing::warn!("Auto-refresh failed: {}", e),
            }
        }
    }
}
