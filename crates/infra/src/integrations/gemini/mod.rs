//! Gemini integration for schedule generation
//!
//! This module provides a client for the Generative Language REST API that
//! implements the core `TextGenerator` port.
//!
//! # Architecture
//!
//! - **Client**: `GeminiClient` - HTTP client wrapper for `generateContent`
//! - **Types**: Request/response wire types and `GeminiError`
//!
//! # Usage
//!
//! ```no_run
//! use routine_infra::http::HttpClient;
//! use routine_infra::integrations::gemini::GeminiClient;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let http_client = HttpClient::new()?;
//!
//! let api_key = std::env::var("GOOGLE_API_KEY")?;
//! let client = GeminiClient::new(api_key, http_client);
//!
//! let text = client
//!     .generate_content("models/gemini-flash-lite-latest", "Reply with []")
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! # API Integration
//!
//! - Endpoint: `POST {base}/v1beta/models/{model}:generateContent`
//! - Auth: `x-goog-api-key` header
//! - Response format: `responseMimeType = application/json`
//!
//! # Error Handling
//!
//! No call is retried here. A failed call surfaces as `GeminiError` and
//! converts into `RoutineError::Generation`; the schedule requester decides
//! whether to try the fallback model.

pub mod client;
pub mod types;

pub use client::GeminiClient;
pub use types::GeminiError;
