use serde::{Deserialize, Serialize};

use crate::models::Course;

/// A weekly recurring class slot. Fields mirror the API payload; weekday,
/// time and date strings are validated at projection time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    /// One of MONDAY..SUNDAY.
    pub day_of_week: String,
    /// Wall-clock "HH:MM".
    pub start_time: String,
    /// Wall-clock "HH:MM", must be after `start_time`.
    pub end_time: String,
    pub room: Option<String>,
    /// First calendar date of the recurrence, "YYYY-MM-DD", inclusive.
    /// Absent while the schedule is not yet dated.
    pub start_date: Option<String>,
    /// Last calendar date of the recurrence, "YYYY-MM-DD", inclusive.
    pub end_date: Option<String>,
    pub course: Course,
}
