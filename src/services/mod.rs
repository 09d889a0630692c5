pub mod calendar_service;
pub mod scheduler;

pub use calendar_service::{CalendarService, RefreshStats};
pub use scheduler::RefreshScheduler;
