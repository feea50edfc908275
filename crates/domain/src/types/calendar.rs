//! Calendar event produced during export

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single exported calendar entry.
///
/// Created transiently while exporting and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier (UID property)
    pub uid: String,
    /// Event summary, label-prefixed activity name
    pub name: String,
    /// Item description, copied verbatim
    pub description: String,
    /// Start at +09:00
    pub start: DateTime<FixedOffset>,
    /// Start plus the fixed event duration
    pub end: DateTime<FixedOffset>,
}

impl CalendarEvent {
    /// Length of the event.
    pub fn duration(&self) -> chrono::TimeDelta {
        self.end - self.start
    }
}
