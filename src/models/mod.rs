pub mod course;
pub mod enrollment;
pub mod schedule;

pub use course::Course;
pub use enrollment::Enrollment;
pub use schedule::Schedule;
