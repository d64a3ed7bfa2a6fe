//! JSON layer: read-only club and event endpoints plus the health check.
//!
//! # Modules
//!
//! - [`dto`] - Response envelopes
//! - [`error`] - JSON rendering of [`crate::error::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
