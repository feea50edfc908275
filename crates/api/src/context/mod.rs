//! Application context - dependency injection container

use std::sync::Arc;

use routine_core::{Clock, SchedulePlanner, TextGenerator};
use routine_domain::{Config, Result};
use routine_infra::{GeminiClient, SystemClock};
use tracing::info;

use crate::utils::health::HealthStatus;

/// Application context - holds the configuration and the planning service
///
/// Shared read-only across requests; each submission runs its own cycle.
pub struct AppContext {
    /// Loaded configuration
    pub config: Config,
    /// Planning service shared by all routes
    pub planner: Arc<SchedulePlanner>,
}

impl AppContext {
    /// Wire the Gemini adapter and the system clock from configuration
    ///
    /// # Errors
    /// Returns `RoutineError::Config` if the API key is blank or the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let generator = Arc::new(GeminiClient::from_config(&config.gemini)?);
        let context = Self::with_services(config, generator, Arc::new(SystemClock));

        info!(
            primary_model = %context.planner.primary_model(),
            fallback_model = %context.planner.fallback_model(),
            "application context initialized"
        );

        Ok(context)
    }

    /// Build a context around explicit port implementations
    pub fn with_services(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let planner = SchedulePlanner::new(
            generator,
            clock,
            config.gemini.primary_model.clone(),
            config.gemini.fallback_model.clone(),
        );

        Self { config, planner: Arc::new(planner) }
    }

    /// Liveness report naming the configured models
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus::new(self.planner.primary_model(), self.planner.fallback_model())
    }
}
