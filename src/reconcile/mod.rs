use std::collections::HashSet;

use crate::models::Enrollment;

/// Merges the server-authoritative enrollment snapshot with the actions
/// the user has just performed in this session, so the UI can show the
/// result of an enroll/unenroll before the next refetch lands.
///
/// The overlays live only until the next `apply_snapshot`; a completed
/// refetch supersedes them.
#[derive(Debug, Default)]
pub struct EnrollmentReconciler {
    snapshot: Vec<Enrollment>,
    just_enrolled: HashSet<String>,
    just_unenrolled: HashSet<String>,
}

impl EnrollmentReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the authoritative snapshot and drop both overlays. Called
    /// when a refetch completes, which bounds the overlays' lifetime.
    pub fn apply_snapshot(&mut self, enrollments: Vec<Enrollment>) {
        self.snapshot = enrollments;
        self.just_enrolled.clear();
        self.just_unenrolled.clear();
    }

    /// Record a just-performed enrollment for `schedule_id`. Idempotent.
    /// A pending unenroll for the same schedule is cancelled, so an
    /// enroll/unenroll/re-enroll sequence ends enrolled.
    pub fn mark_enrolled(&mut self, schedule_id: &str) {
        self.just_enrolled.insert(schedule_id.to_string());
        let pending = self.find_by_schedule(schedule_id).map(|e| e.id.clone());
        if let Some(enrollment_id) = pending {
            self.just_unenrolled.remove(&enrollment_id);
        }
    }

    /// Record a just-performed unenrollment of `enrollment_id`. Idempotent.
    pub fn mark_unenrolled(&mut self, enrollment_id: &str) {
        self.just_unenrolled.insert(enrollment_id.to_string());
        let schedule_id = self
            .snapshot
            .iter()
            .find(|e| e.id == enrollment_id)
            .map(|e| e.schedule.id.clone());
        if let Some(schedule_id) = schedule_id {
            self.just_enrolled.remove(&schedule_id);
        }
    }

    /// The enrolled state to display for a schedule: local adds widen the
    /// authoritative set, local removes narrow it.
    pub fn is_enrolled(&self, schedule_id: &str) -> bool {
        let authoritative = self.find_by_schedule(schedule_id);
        let enrolled = self.just_enrolled.contains(schedule_id) || authoritative.is_some();
        let removed = authoritative.is_some_and(|e| self.just_unenrolled.contains(&e.id));
        enrolled && !removed
    }

    /// The authoritative snapshot, as fed to the projector.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.snapshot
    }

    fn find_by_schedule(&self, schedule_id: &str) -> Option<&Enrollment> {
        self.snapshot.iter().find(|e| e.schedule.id == schedule_id)
    }
}
