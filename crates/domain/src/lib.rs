//! # Routine Master Domain
//!
//! Business domain types and models for Routine Master.
//!
//! This crate contains:
//! - Schedule data types (ScheduleRequest, ScheduleItem, CalendarEvent)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (model identifiers, calendar defaults, user messages)
//!
//! ## Architecture
//! - No dependencies on other Routine Master crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
