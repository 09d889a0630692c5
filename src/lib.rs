pub mod api;
pub mod calendar;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod services;
