//! Domain types and models

pub mod calendar;
pub mod schedule;

pub use calendar::CalendarEvent;
pub use schedule::{PlannedSchedule, ScheduleItem, ScheduleRequest};
