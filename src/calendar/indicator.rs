use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::calendar::{CalendarView, start_of_week};

/// Placement of the "now" line on the time grid. One offset unit per
/// minute since midnight; the renderer scales it to row height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorPosition {
    pub offset_minutes: u32,
    /// 0-based column within the week grid (0 = Monday). None in day view.
    pub weekday_column: Option<u32>,
}

/// Where to draw the current-time indicator, or None when `now` falls
/// outside the displayed window. `now` is passed in by the caller so the
/// computation stays pure.
pub fn current_time_indicator(
    now: NaiveDateTime,
    current_date: NaiveDate,
    view: CalendarView,
) -> Option<IndicatorPosition> {
    let today = now.date();

    let weekday_column = match view {
        CalendarView::Day => {
            if today != current_date {
                return None;
            }
            None
        }
        CalendarView::Week => {
            let monday = start_of_week(current_date);
            if today < monday || today >= monday + Duration::days(7) {
                return None;
            }
            Some(today.weekday().num_days_from_monday())
        }
        CalendarView::Month => return None,
    };

    Some(IndicatorPosition {
        offset_minutes: now.time().hour() * 60 + now.time().minute(),
        weekday_column,
    })
}
