//! Shared helpers for the web shell

pub mod health;
pub mod logging;
