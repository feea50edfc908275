//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use routine_domain::RoutineError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RoutineError);

impl From<InfraError> for RoutineError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RoutineError> for InfraError {
    fn from(value: RoutineError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRoutineError {
    fn into_routine(self) -> RoutineError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RoutineError */
/* -------------------------------------------------------------------------- */

impl IntoRoutineError for HttpError {
    fn into_routine(self) -> RoutineError {
        if self.is_timeout() {
            return RoutineError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RoutineError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return RoutineError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                400..=499 => RoutineError::InvalidInput(message),
                _ => RoutineError::Network(message),
            };
        }

        if self.is_decode() {
            return RoutineError::Network(format!("failed to read HTTP response body: {self}"));
        }

        RoutineError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_routine())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
