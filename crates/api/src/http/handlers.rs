//! HTTP handlers.
//!
//! Every submission runs one independent planning cycle through the shared
//! [`SchedulePlanner`](routine_core::SchedulePlanner).

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use routine_domain::constants::CALENDAR_FILENAME;
use routine_domain::{PlannedSchedule, Result};

use super::dto::{ScheduleForm, ScheduleResponse};
use super::error::ApiError;
use super::views;
use crate::context::AppContext;
use crate::utils::health::HealthStatus;
use crate::utils::logging::log_route_execution;

async fn run_cycle(ctx: &AppContext, form: ScheduleForm) -> Result<PlannedSchedule> {
    let request = form.into_request(&ctx.planner)?;
    ctx.planner.plan(&request).await
}

async fn timed_cycle(ctx: &AppContext, route: &str, form: ScheduleForm) -> Result<PlannedSchedule> {
    let start = Instant::now();
    let result = run_cycle(ctx, form).await;
    log_route_execution(route, start.elapsed(), result.as_ref().err());
    result
}

/// GET /
pub async fn index(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    Html(views::render_page(ctx.planner.primary_model(), &ScheduleForm::default(), None))
}

/// POST /schedule
///
/// Renders the page again with either the schedule table and download link,
/// or the error notice. Failures never produce a partial table.
pub async fn submit_schedule(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<ScheduleForm>,
) -> Html<String> {
    let result = timed_cycle(&ctx, "POST /schedule", form.clone()).await;
    Html(views::render_page(ctx.planner.primary_model(), &form, Some(&result)))
}

/// POST /api/schedule
pub async fn api_schedule(
    State(ctx): State<Arc<AppContext>>,
    Json(form): Json<ScheduleForm>,
) -> std::result::Result<Json<ScheduleResponse>, ApiError> {
    let planned = timed_cycle(&ctx, "POST /api/schedule", form).await?;
    Ok(Json(planned.into()))
}

/// POST /schedule.ics
///
/// Same inputs as the form; answers with the calendar file as an attachment.
pub async fn download_calendar(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<ScheduleForm>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let planned = timed_cycle(&ctx, "POST /schedule.ics", form).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{CALENDAR_FILENAME}\"")),
    ];

    Ok((headers, planned.calendar))
}

/// GET /health
pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> Json<HealthStatus> {
    Json(ctx.health_check())
}
