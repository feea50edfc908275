//! Tracing bootstrap and structured route logging

use std::time::Duration;

use routine_domain::{LoggingConfig, RoutineError};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies to the
/// whole process, with `tower_http` request spans at the same level.
///
/// # Errors
/// Fails when the configured level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let json_layer = config.json.then(|| fmt::layer().json());
    let text_layer = (!config.json).then(|| fmt::layer().with_target(true));

    tracing_subscriber::registry().with(filter).with(json_layer).with(text_layer).try_init()?;

    Ok(())
}

/// Log the outcome of one handled route with structured fields.
///
/// `route` should be a stable identifier such as `"POST /schedule"`.
#[inline]
pub fn log_route_execution(route: &str, elapsed: Duration, error: Option<&RoutineError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(route, duration_ms, "route_execution_success"),
        Some(err) => {
            warn!(route, duration_ms, error_type = error_label(err), error = %err, "route_execution_failure");
        }
    }
}

/// Convert a `RoutineError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RoutineError) -> &'static str {
    error.kind_label()
}
