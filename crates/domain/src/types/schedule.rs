//! Schedule request and model-proposed schedule items

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One user submission of the routine form.
///
/// Constructed fresh per submission and never mutated afterwards; the
/// free-text fields are carried verbatim into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Self-reported condition (e.g. "💪 최고!")
    pub condition: String,
    /// Start of the available window, "HH:MM"
    pub start_time: String,
    /// End of the available window, "HH:MM"
    pub end_time: String,
    /// Weekday rule text
    pub weekday_rule: String,
    /// Weekend rule text
    pub weekend_rule: String,
    /// Local wall-clock time at which the request was built
    pub requested_at: NaiveDateTime,
}

impl ScheduleRequest {
    /// Capture one submission.
    pub fn new(
        condition: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        weekday_rule: impl Into<String>,
        weekend_rule: impl Into<String>,
        requested_at: NaiveDateTime,
    ) -> Self {
        Self {
            condition: condition.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            weekday_rule: weekday_rule.into(),
            weekend_rule: weekend_rule.into(),
            requested_at,
        }
    }
}

/// One activity block proposed by the model.
///
/// Items are independent: overlaps and ordering are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Activity name
    pub activity: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM". Displayed, but not used for the calendar event's end.
    pub end_time: String,
    /// Free-text description
    pub description: String,
}

/// Result of one generation cycle, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSchedule {
    /// Model identifier that produced the reply
    pub model: String,
    /// Items in reply order
    pub items: Vec<ScheduleItem>,
    /// Serialized iCalendar document
    pub calendar: String,
}
