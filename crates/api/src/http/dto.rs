//! Request and response bodies shared by the form and JSON routes.

use chrono::NaiveTime;
use routine_core::SchedulePlanner;
use routine_domain::constants::{
    DEFAULT_CONDITION, DEFAULT_END_TIME, DEFAULT_START_TIME, DEFAULT_WEEKDAY_RULE,
    DEFAULT_WEEKEND_RULE, SCHEDULE_TIME_FORMAT,
};
use routine_domain::{PlannedSchedule, Result, RoutineError, ScheduleItem, ScheduleRequest};
use serde::{Deserialize, Serialize};

/// User inputs of one submission. Missing fields take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleForm {
    /// Free-text condition, e.g. "💪 최고!"
    pub condition: String,
    /// Window start, `HH:MM`
    pub start_time: String,
    /// Window end, `HH:MM`
    pub end_time: String,
    /// Weekday rule text
    pub weekday_rule: String,
    /// Weekend rule text
    pub weekend_rule: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            condition: DEFAULT_CONDITION.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            weekday_rule: DEFAULT_WEEKDAY_RULE.to_string(),
            weekend_rule: DEFAULT_WEEKEND_RULE.to_string(),
        }
    }
}

impl ScheduleForm {
    /// Check that both window bounds are `HH:MM` times.
    ///
    /// # Errors
    /// Returns `RoutineError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("start_time", &self.start_time), ("end_time", &self.end_time)] {
            NaiveTime::parse_from_str(value.trim(), SCHEDULE_TIME_FORMAT).map_err(|_| {
                RoutineError::InvalidInput(format!("{field} must be HH:MM, got '{value}'"))
            })?;
        }
        Ok(())
    }

    /// Validate and turn the inputs into a request stamped by the planner's clock.
    ///
    /// # Errors
    /// See [`ScheduleForm::validate`].
    pub fn into_request(self, planner: &SchedulePlanner) -> Result<ScheduleRequest> {
        self.validate()?;

        Ok(planner.new_request(
            self.condition,
            self.start_time.trim(),
            self.end_time.trim(),
            self.weekday_rule,
            self.weekend_rule,
        ))
    }
}

/// JSON body returned by `POST /api/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Model identifier that answered
    pub model: String,
    /// Decoded schedule items, in reply order
    pub items: Vec<ScheduleItem>,
    /// iCalendar document for the items
    pub calendar: String,
}

impl From<PlannedSchedule> for ScheduleResponse {
    fn from(planned: PlannedSchedule) -> Self {
        Self { model: planned.model, items: planned.items, calendar: planned.calendar }
    }
}
