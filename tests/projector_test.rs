use chrono::NaiveDate;
use skillup_calendar::calendar::{
    CalendarView, current_time_indicator, project_events, start_of_week, visible_days,
};
use skillup_calendar::models::{Course, Enrollment, Schedule};

fn enrollment(id: &str, day_of_week: &str, start_time: &str, end_time: &str) -> Enrollment {
    Enrollment {
        id: id.to_string(),
        schedule: Schedule {
            id: format!("sched-{}", id),
            day_of_week: day_of_week.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            room: Some("A-101".to_string()),
            start_date: Some("2024-09-02".to_string()),
            end_date: Some("2024-12-20".to_string()),
            course: Course {
                id: format!("course-{}", id),
                title: format!("Course {}", id),
                lecturer: Some("Dr. Vance".to_string()),
            },
        },
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// Surfaces the projector's skip diagnostics when RUST_LOG is set.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn week_view_pins_event_to_its_weekday() {
    let enrollments = vec![enrollment("e1", "WEDNESDAY", "09:00", "10:30")];

    // Same week, three different anchor days: always the same Wednesday.
    for anchor in [date(2024, 9, 2), date(2024, 9, 5), date(2024, 9, 8)] {
        let events = project_events(&enrollments, anchor, CalendarView::Week);
        assert_eq!(events.len(), 1, "anchor {}", anchor);
        assert_eq!(events[0].start_time.date(), date(2024, 9, 4));
    }
}

#[test]
fn range_bounds_are_inclusive() {
    let enrollments = vec![enrollment("e1", "MONDAY", "09:00", "10:00")];

    // start_date itself is a Monday and must produce an event.
    let events = project_events(&enrollments, date(2024, 9, 2), CalendarView::Week);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start_time.date(), date(2024, 9, 2));

    // The week before the range starts: nothing.
    let events = project_events(&enrollments, date(2024, 8, 28), CalendarView::Week);
    assert!(events.is_empty());

    // The week after the range ends: nothing.
    let events = project_events(&enrollments, date(2024, 12, 25), CalendarView::Week);
    assert!(events.is_empty());
}

#[test]
fn day_view_filters_on_weekday() {
    let enrollments = vec![
        enrollment("wed", "WEDNESDAY", "09:00", "10:30"),
        enrollment("tue", "TUESDAY", "11:00", "12:00"),
    ];

    // 2024-09-03 is a Tuesday.
    let events = project_events(&enrollments, date(2024, 9, 3), CalendarView::Day);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "tue");
    assert_eq!(events[0].start_time.date(), date(2024, 9, 3));
}

#[test]
fn times_compose_onto_the_occurrence_date() {
    let enrollments = vec![enrollment("e1", "WEDNESDAY", "09:00", "10:30")];

    let events = project_events(&enrollments, date(2024, 9, 4), CalendarView::Day);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].start_time,
        date(2024, 9, 4).and_hms_opt(9, 0, 0).expect("valid time")
    );
    assert_eq!(
        events[0].end_time,
        date(2024, 9, 4).and_hms_opt(10, 30, 0).expect("valid time")
    );
    assert_eq!(events[0].title, "Course e1");
    assert_eq!(events[0].room.as_deref(), Some("A-101"));
}

#[test]
fn identical_slots_are_not_deduplicated() {
    let enrollments = vec![
        enrollment("e1", "WEDNESDAY", "09:00", "10:30"),
        enrollment("e2", "WEDNESDAY", "09:00", "10:30"),
    ];

    let events = project_events(&enrollments, date(2024, 9, 4), CalendarView::Week);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "e1");
    assert_eq!(events[1].id, "e2");
}

#[test]
fn missing_range_bounds_exclude_the_enrollment() {
    let mut without_start = enrollment("e1", "WEDNESDAY", "09:00", "10:30");
    without_start.schedule.start_date = None;
    let mut without_end = enrollment("e2", "WEDNESDAY", "09:00", "10:30");
    without_end.schedule.end_date = None;
    let enrollments = vec![without_start, without_end];

    assert!(project_events(&enrollments, date(2024, 9, 4), CalendarView::Week).is_empty());
    assert!(project_events(&enrollments, date(2024, 9, 4), CalendarView::Day).is_empty());
}

#[test]
fn unrecognized_weekday_is_rejected_not_defaulted() {
    init_tracing();
    let enrollments = vec![enrollment("e1", "FUNDAY", "09:00", "10:30")];

    // Must not land on Monday or anywhere else.
    let events = project_events(&enrollments, date(2024, 9, 2), CalendarView::Week);
    assert!(events.is_empty());
}

#[test]
fn malformed_or_inverted_times_are_rejected() {
    init_tracing();
    let garbled = enrollment("e1", "WEDNESDAY", "9 o'clock", "10:30");
    let inverted = enrollment("e2", "WEDNESDAY", "10:30", "09:00");

    let events = project_events(&[garbled, inverted], date(2024, 9, 4), CalendarView::Week);
    assert!(events.is_empty());
}

#[test]
fn month_view_is_reserved() {
    assert!(!CalendarView::Month.is_selectable());
    assert!(!CalendarView::selectable().contains(&CalendarView::Month));

    let enrollments = vec![enrollment("e1", "WEDNESDAY", "09:00", "10:30")];
    assert!(project_events(&enrollments, date(2024, 9, 4), CalendarView::Month).is_empty());
    assert!(visible_days(date(2024, 9, 4), CalendarView::Month).is_empty());
}

#[test]
fn visible_days_cover_the_iso_week() {
    let days = visible_days(date(2024, 9, 4), CalendarView::Week);
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], date(2024, 9, 2));
    assert_eq!(days[6], date(2024, 9, 8));

    assert_eq!(
        visible_days(date(2024, 9, 4), CalendarView::Day),
        vec![date(2024, 9, 4)]
    );
}

#[test]
fn start_of_week_is_monday() {
    for day in 2..=8 {
        assert_eq!(start_of_week(date(2024, 9, day)), date(2024, 9, 2));
    }
}

#[test]
fn indicator_appears_only_inside_the_window() {
    let wed_morning = date(2024, 9, 4).and_hms_opt(9, 30, 0).expect("valid time");

    // Day view, same day: offset only, no column.
    let pos = current_time_indicator(wed_morning, date(2024, 9, 4), CalendarView::Day)
        .expect("indicator in window");
    assert_eq!(pos.offset_minutes, 9 * 60 + 30);
    assert_eq!(pos.weekday_column, None);

    // Day view, different day: hidden.
    assert!(current_time_indicator(wed_morning, date(2024, 9, 5), CalendarView::Day).is_none());

    // Week view, anchor anywhere in the same week: Wednesday column.
    let pos = current_time_indicator(wed_morning, date(2024, 9, 8), CalendarView::Week)
        .expect("indicator in window");
    assert_eq!(pos.weekday_column, Some(2));
    assert_eq!(pos.offset_minutes, 570);

    // Week view, a different week: hidden.
    assert!(current_time_indicator(wed_morning, date(2024, 9, 12), CalendarView::Week).is_none());

    // Month view never shows it.
    assert!(current_time_indicator(wed_morning, date(2024, 9, 4), CalendarView::Month).is_none());
}
