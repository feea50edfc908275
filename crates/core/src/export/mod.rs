//! Calendar Exporter
//!
//! Turns schedule items into one-hour events on the current day at UTC+9 and
//! serializes them as an iCalendar document. Export is all-or-nothing: a
//! single malformed `start_time` fails the whole operation.

pub mod ics;

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use routine_domain::constants::{
    EVENT_DURATION_MINUTES, EVENT_LABEL, EVENT_UTC_OFFSET_SECS, SCHEDULE_TIME_FORMAT,
};
use routine_domain::{CalendarEvent, Result, RoutineError, ScheduleItem};
use tracing::debug;
use uuid::Uuid;

use crate::ports::Clock;

/// Exporter anchored to the clock's "today"
pub struct CalendarExporter {
    clock: Arc<dyn Clock>,
}

impl CalendarExporter {
    /// Create an exporter reading "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Build events for `items` and serialize them.
    ///
    /// "Today" is read once per export, not per item.
    ///
    /// # Errors
    /// Returns `RoutineError::Export` if any item's `start_time` is not `HH:MM`.
    pub fn export(&self, items: &[ScheduleItem]) -> Result<String> {
        let now = self.clock.now();
        let events = build_events(items, now.date_naive())?;

        debug!(event_count = events.len(), date = %now.date_naive(), "exporting calendar");
        Ok(ics::serialize(&events, now.with_timezone(&Utc)))
    }
}

/// Convert items into calendar events dated `today`, in input order.
///
/// The item's `end_time` is not consulted: every event lasts
/// `EVENT_DURATION_MINUTES`.
///
/// # Errors
/// Returns `RoutineError::Export` on the first item whose `start_time` does
/// not parse; no events are returned in that case.
pub fn build_events(items: &[ScheduleItem], today: NaiveDate) -> Result<Vec<CalendarEvent>> {
    let offset = FixedOffset::east_opt(EVENT_UTC_OFFSET_SECS)
        .ok_or_else(|| RoutineError::Internal("invalid event UTC offset".into()))?;

    items.iter().enumerate().map(|(index, item)| to_event(index, item, today, offset)).collect()
}

fn to_event(
    index: usize,
    item: &ScheduleItem,
    today: NaiveDate,
    offset: FixedOffset,
) -> Result<CalendarEvent> {
    let time = NaiveTime::parse_from_str(&item.start_time, SCHEDULE_TIME_FORMAT).map_err(|err| {
        RoutineError::Export(format!(
            "item {} ('{}') has invalid start_time '{}': {}",
            index + 1,
            item.activity,
            item.start_time,
            err
        ))
    })?;

    let start = offset.from_local_datetime(&today.and_time(time)).single().ok_or_else(|| {
        RoutineError::Export(format!("start_time '{}' is ambiguous", item.start_time))
    })?;

    Ok(CalendarEvent {
        uid: format!("{}@routine-master", Uuid::new_v4()),
        name: format!("{EVENT_LABEL} {}", item.activity),
        description: item.description.clone(),
        start,
        end: start + TimeDelta::minutes(EVENT_DURATION_MINUTES),
    })
}
