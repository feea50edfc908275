//! Port interfaces for the schedule pipeline

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use routine_domain::Result;

/// Trait for a hosted text-generation service
///
/// One call is one attempt against one model identifier. Implementations
/// must request a JSON-typed response and return the reply text unmodified.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `prompt` using `model`
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}

/// Trait for reading the local wall clock
pub trait Clock: Send + Sync {
    /// Current local time, including the process's UTC offset
    fn now(&self) -> DateTime<FixedOffset>;
}
