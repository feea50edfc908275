//! # Routine Master Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client implementation
//! - Gemini text-generation client (`TextGenerator`)
//! - Configuration loading (environment, secrets/config files)
//! - System clock (`Clock`)
//!
//! ## Architecture
//! - Implements traits defined in `routine-core`
//! - Depends on `routine-domain` and `routine-core`
//! - Contains all "impure" code (I/O, network, environment)

pub mod clock;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use clock::SystemClock;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::gemini::{GeminiClient, GeminiError};
