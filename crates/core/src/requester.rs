//! Schedule Requester
//!
//! Sends the prompt to the primary model and, on any failure, retries exactly
//! once against the fallback model with the same prompt. There is no further
//! retry budget and no backoff.

use std::sync::Arc;

use routine_domain::{Result, RoutineError};
use tracing::{debug, info, warn};

use crate::ports::TextGenerator;

/// Raw reply text plus the model identifier that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// Reply text, unmodified
    pub text: String,
    /// Model identifier that answered
    pub model: String,
    /// `true` when the primary attempt failed
    pub used_fallback: bool,
}

/// Two-step request chain: primary model, then fixed fallback model
pub struct ScheduleRequester {
    generator: Arc<dyn TextGenerator>,
    primary_model: String,
    fallback_model: String,
}

impl ScheduleRequester {
    /// Create a requester over `generator` with the two model identifiers.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        primary_model: impl Into<String>,
        fallback_model: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
        }
    }

    /// Model tried first.
    pub fn primary_model(&self) -> &str {
        &self.primary_model
    }

    /// Model tried once after a primary failure.
    pub fn fallback_model(&self) -> &str {
        &self.fallback_model
    }

    /// Request a schedule reply for `prompt`.
    ///
    /// # Errors
    /// Returns `RoutineError::Request` when both the primary and the fallback
    /// attempt fail. A primary failure alone is never surfaced.
    pub async fn request(&self, prompt: &str) -> Result<RequestOutcome> {
        debug!(model = %self.primary_model, prompt_len = prompt.len(), "requesting schedule");

        let primary_err = match self.generator.generate(&self.primary_model, prompt).await {
            Ok(text) => {
                return Ok(RequestOutcome {
                    text,
                    model: self.primary_model.clone(),
                    used_fallback: false,
                });
            }
            Err(err) => err,
        };

        warn!(
            primary = %self.primary_model,
            fallback = %self.fallback_model,
            error = %primary_err,
            "primary model failed, retrying with fallback model"
        );

        match self.generator.generate(&self.fallback_model, prompt).await {
            Ok(text) => {
                info!(model = %self.fallback_model, "fallback model answered");
                Ok(RequestOutcome { text, model: self.fallback_model.clone(), used_fallback: true })
            }
            Err(fallback_err) => Err(RoutineError::Request(format!(
                "primary model '{}' failed ({}); fallback model '{}' failed ({})",
                self.primary_model, primary_err, self.fallback_model, fallback_err
            ))),
        }
    }
}
