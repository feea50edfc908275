//! Schedule planning service - core business logic

use std::sync::Arc;

use routine_domain::{PlannedSchedule, Result, ScheduleRequest};
use tracing::{info, warn};

use crate::export::CalendarExporter;
use crate::parser::parse_schedule;
use crate::ports::{Clock, TextGenerator};
use crate::prompt::build_prompt;
use crate::requester::ScheduleRequester;

/// Runs one generation cycle: prompt → request → parse → export
///
/// Cycles share no mutable state; every call is independent.
pub struct SchedulePlanner {
    requester: ScheduleRequester,
    exporter: CalendarExporter,
    clock: Arc<dyn Clock>,
}

impl SchedulePlanner {
    /// Create a new planner
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
    ) -> Self {
        Self {
            requester: ScheduleRequester::new(generator, primary_model, fallback_model),
            exporter: CalendarExporter::new(clock.clone()),
            clock,
        }
    }

    /// Model tried first.
    pub fn primary_model(&self) -> &str {
        self.requester.primary_model()
    }

    /// Model tried once after a primary failure.
    pub fn fallback_model(&self) -> &str {
        self.requester.fallback_model()
    }

    /// Build a request stamped with the current local time
    pub fn new_request(
        &self,
        condition: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        weekday_rule: impl Into<String>,
        weekend_rule: impl Into<String>,
    ) -> ScheduleRequest {
        ScheduleRequest::new(
            condition,
            start_time,
            end_time,
            weekday_rule,
            weekend_rule,
            self.clock.now().naive_local(),
        )
    }

    /// Generate a schedule and its calendar for `request`.
    ///
    /// # Errors
    /// - `RoutineError::Request` if both model attempts fail
    /// - `RoutineError::Decode` if the reply is not a schedule array
    /// - `RoutineError::Export` if any start time is malformed
    pub async fn plan(&self, request: &ScheduleRequest) -> Result<PlannedSchedule> {
        let prompt = build_prompt(request);

        let outcome = self.requester.request(&prompt).await?;

        let items = parse_schedule(&outcome.text).inspect_err(|err| {
            warn!(model = %outcome.model, error = %err, "model reply could not be decoded");
        })?;

        let calendar = self.exporter.export(&items)?;

        info!(
            model = %outcome.model,
            used_fallback = outcome.used_fallback,
            item_count = items.len(),
            "schedule generated"
        );

        Ok(PlannedSchedule { model: outcome.model, items, calendar })
    }
}
