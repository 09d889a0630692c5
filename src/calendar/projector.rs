use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use tracing::warn;

use crate::calendar::{CalendarEvent, CalendarView, start_of_week};
use crate::models::{Enrollment, Schedule};

/// Project a set of enrollments onto the view window anchored at
/// `current_date`, producing one event per schedule occurrence that
/// falls inside the window and the schedule's own date range.
///
/// Records that cannot be dated (missing range bounds) are dropped
/// silently; records with malformed weekday, time or date strings are
/// dropped with a diagnostic. Overlapping events are all emitted;
/// stacking is the renderer's job. Source order is preserved.
pub fn project_events(
    enrollments: &[Enrollment],
    current_date: NaiveDate,
    view: CalendarView,
) -> Vec<CalendarEvent> {
    if view == CalendarView::Month {
        warn!("month view is not implemented; projecting no events");
        return Vec::new();
    }

    enrollments
        .iter()
        .filter_map(|enrollment| project_enrollment(enrollment, current_date, view))
        .collect()
}

fn project_enrollment(
    enrollment: &Enrollment,
    current_date: NaiveDate,
    view: CalendarView,
) -> Option<CalendarEvent> {
    let schedule = &enrollment.schedule;

    let Some(day_index) = iso_weekday_index(&schedule.day_of_week) else {
        warn!(
            "Skipping enrollment {}: unrecognized day_of_week '{}'",
            enrollment.id, schedule.day_of_week
        );
        return None;
    };

    let occurrence = match view {
        // The schedule is pinned to its own weekday within the displayed
        // week, no matter which day the anchor falls on.
        CalendarView::Week => start_of_week(current_date) + Duration::days(i64::from(day_index) - 1),
        CalendarView::Day => {
            if current_date.weekday().num_days_from_monday() + 1 != day_index {
                return None;
            }
            current_date
        }
        CalendarView::Month => return None,
    };

    // A schedule without both bounds is not yet configured; skip quietly.
    let (Some(start_raw), Some(end_raw)) = (&schedule.start_date, &schedule.end_date) else {
        return None;
    };
    let range_start = parse_date(&enrollment.id, "start_date", start_raw)?;
    let range_end = parse_date(&enrollment.id, "end_date", end_raw)?;
    if occurrence < range_start || occurrence > range_end {
        return None;
    }

    let (start_time, end_time) = parse_times(&enrollment.id, schedule)?;

    Some(CalendarEvent {
        id: enrollment.id.clone(),
        title: schedule.course.title.clone(),
        room: schedule.room.clone(),
        start_time: occurrence.and_time(start_time),
        end_time: occurrence.and_time(end_time),
    })
}

fn parse_times(enrollment_id: &str, schedule: &Schedule) -> Option<(NaiveTime, NaiveTime)> {
    let start = parse_time(enrollment_id, "start_time", &schedule.start_time)?;
    let end = parse_time(enrollment_id, "end_time", &schedule.end_time)?;
    if end <= start {
        warn!(
            "Skipping enrollment {}: end_time '{}' is not after start_time '{}'",
            enrollment_id, schedule.end_time, schedule.start_time
        );
        return None;
    }
    Some((start, end))
}

fn parse_time(enrollment_id: &str, field: &str, value: &str) -> Option<NaiveTime> {
    match NaiveTime::parse_from_str(value, "%H:%M") {
        Ok(time) => Some(time),
        Err(e) => {
            warn!(
                "Skipping enrollment {}: malformed {} '{}': {}",
                enrollment_id, field, value, e
            );
            None
        }
    }
}

fn parse_date(enrollment_id: &str, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(
                "Skipping enrollment {}: malformed {} '{}': {}",
                enrollment_id, field, value, e
            );
            None
        }
    }
}

/// Map a weekday name to its ISO number (Monday=1..Sunday=7). Unknown
/// names are rejected rather than defaulted.
fn iso_weekday_index(name: &str) -> Option<u32> {
    match name.to_ascii_uppercase().as_str() {
        "MONDAY" => Some(1),
        "TUESDAY" => Some(2),
        "WEDNESDAY" => Some(3),
        "THURSDAY" => Some(4),
        "FRIDAY" => Some(5),
        "SATURDAY" => Some(6),
        "SUNDAY" => Some(7),
        _ => None,
    }
}
