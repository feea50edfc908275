//! # Routine Master App
//!
//! Presentation shell - web form, JSON API and binary entry point.
//!
//! This crate contains:
//! - HTTP routes (form page, JSON API, calendar download, health)
//! - Application context (dependency injection)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the Gemini adapter and system clock into the core planner

pub mod context;
pub mod http;
pub mod utils;

pub use context::AppContext;
pub use http::create_router;
