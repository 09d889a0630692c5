use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::api::EnrollmentSource;
use crate::calendar::{
    CalendarEvent, CalendarView, IndicatorPosition, current_time_indicator, project_events,
};
use crate::error::AppError;
use crate::reconcile::EnrollmentReconciler;

/// Holds the current enrollment snapshot and answers the calendar and
/// course-detail views from it. Mutations go through the source first and
/// are reflected optimistically until the next refresh supersedes them.
pub struct CalendarService {
    source: Arc<dyn EnrollmentSource>,
    reconciler: Mutex<EnrollmentReconciler>,
}

#[derive(Debug, Serialize)]
pub struct RefreshStats {
    pub enrollments_fetched: usize,
}

impl CalendarService {
    pub fn new(source: Arc<dyn EnrollmentSource>) -> Self {
        Self {
            source,
            reconciler: Mutex::new(EnrollmentReconciler::new()),
        }
    }

    /// Fetch a fresh snapshot and make it authoritative. Completing the
    /// refetch also clears the optimistic overlays.
    pub async fn refresh(&self) -> Result<RefreshStats, AppError> {
        let enrollments = self.source.fetch_enrollments().await?;
        let stats = RefreshStats {
            enrollments_fetched: enrollments.len(),
        };

        let mut reconciler = self.reconciler.lock().await;
        reconciler.apply_snapshot(enrollments);
        info!("Refreshed enrollments: {} records", stats.enrollments_fetched);
        Ok(stats)
    }

    /// Events to render for the given view window.
    pub async fn events_for(&self, current_date: NaiveDate, view: CalendarView) -> Vec<CalendarEvent> {
        let reconciler = self.reconciler.lock().await;
        project_events(reconciler.enrollments(), current_date, view)
    }

    /// Placement of the "now" line, if `now` is inside the window.
    pub fn time_indicator(
        &self,
        now: NaiveDateTime,
        current_date: NaiveDate,
        view: CalendarView,
    ) -> Option<IndicatorPosition> {
        current_time_indicator(now, current_date, view)
    }

    /// Enroll in a schedule, then mark it enrolled locally so the UI
    /// shows the result before the next refresh.
    pub async fn enroll(&self, schedule_id: &str) -> Result<(), AppError> {
        self.source.create_enrollment(schedule_id).await?;
        let mut reconciler = self.reconciler.lock().await;
        reconciler.mark_enrolled(schedule_id);
        Ok(())
    }

    /// Drop an enrollment, then mark it removed locally.
    pub async fn unenroll(&self, enrollment_id: &str) -> Result<(), AppError> {
        self.source.delete_enrollment(enrollment_id).await?;
        let mut reconciler = self.reconciler.lock().await;
        reconciler.mark_unenrolled(enrollment_id);
        Ok(())
    }

    /// Enrolled state for a schedule as the course-detail page shows it.
    pub async fn is_enrolled(&self, schedule_id: &str) -> bool {
        let reconciler = self.reconciler.lock().await;
        reconciler.is_enrolled(schedule_id)
    }
}
