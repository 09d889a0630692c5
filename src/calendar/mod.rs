pub mod indicator;
pub mod projector;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub use indicator::{IndicatorPosition, current_time_indicator};
pub use projector::project_events;

/// The calendar window the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarView {
    Day,
    Week,
    /// Reserved. Not implemented yet; must stay unselectable in the UI
    /// and projects no events.
    Month,
}

impl CalendarView {
    pub fn is_selectable(self) -> bool {
        !matches!(self, CalendarView::Month)
    }

    /// Views the UI may offer.
    pub fn selectable() -> &'static [CalendarView] {
        &[CalendarView::Day, CalendarView::Week]
    }
}

/// One concrete occurrence of an enrolled schedule, ready to render.
/// Derived on every projection, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub room: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Monday of the ISO week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The calendar days shown for a view window. Week runs Monday..Sunday
/// of the ISO week containing `current_date`.
pub fn visible_days(current_date: NaiveDate, view: CalendarView) -> Vec<NaiveDate> {
    match view {
        CalendarView::Day => vec![current_date],
        CalendarView::Week => {
            let monday = start_of_week(current_date);
            (0..7).map(|offset| monday + Duration::days(offset)).collect()
        }
        CalendarView::Month => Vec::new(),
    }
}
