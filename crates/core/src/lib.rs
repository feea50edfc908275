//! # Routine Master Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Prompt Builder: user inputs → fixed prompt template
//! - Schedule Requester: primary model with a single fallback attempt
//! - Schedule Parser: model reply → typed schedule items
//! - Calendar Exporter: schedule items → iCalendar document
//! - Port interfaces (traits) for the text-generation service and the clock
//!
//! ## Architecture Principles
//! - Only depends on `routine-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod export;
pub mod parser;
pub mod ports;
pub mod prompt;
pub mod requester;
pub mod service;

// Re-export specific items to avoid ambiguity
pub use export::CalendarExporter;
pub use parser::parse_schedule;
pub use ports::{Clock, TextGenerator};
pub use prompt::build_prompt;
pub use requester::{RequestOutcome, ScheduleRequester};
pub use service::SchedulePlanner;
