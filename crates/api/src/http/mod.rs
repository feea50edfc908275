//! HTTP shell: single-page form, JSON API and calendar download.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod views;

pub use error::ApiError;
pub use router::create_router;
