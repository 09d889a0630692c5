use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::services::CalendarService;

/// Periodically re-fetches the enrollment snapshot so the calendar keeps
/// up with server-side changes.
pub struct RefreshScheduler {
    service: Arc<CalendarService>,
    interval: Duration,
}

impl RefreshScheduler {
    pub fn new(service: Arc<CalendarService>, interval_secs: u64) -> Self {
        Self {
            service,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Run refreshes in an endless loop. A failed refresh is logged and
    /// the loop continues with the previous snapshot.
    pub async fn start(self) {
        info!("Starting refresh scheduler (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            match self.service.refresh().await {
                Ok(stats) => {
                    info!(
                        "Scheduled refresh completed - {} enrollments",
                        stats.enrollments_fetched
                    );
                }
                Err(e) => {
                    tracing::warn!("Scheduled refresh failed: {:?}", e);
                }
            }
        }
    }
}
