//! Liveness report for the `/health` endpoint

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Health of the running server
///
/// # Example
/// ```
/// use routine_app::utils::health::HealthStatus;
///
/// let status = HealthStatus::new("models/a", "models/b");
/// assert!(status.is_healthy);
/// assert_eq!(status.primary_model, "models/a");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `true` while the process is able to answer
    pub is_healthy: bool,

    /// Model tried first for every request
    pub primary_model: String,

    /// Model tried once when the primary attempt fails
    pub fallback_model: String,

    /// Crate version of the running binary
    pub version: String,

    /// Unix timestamp when the check was performed
    pub timestamp: i64,
}

impl HealthStatus {
    /// Report for the given model pair, stamped now.
    pub fn new(primary_model: impl Into<String>, fallback_model: impl Into<String>) -> Self {
        Self {
            is_healthy: true,
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}
