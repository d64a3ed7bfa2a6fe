//! Server-rendered HTML pages.
//!
//! Uses Askama templates from `templates/`. Form submissions that fail
//! validation are answered with the same form, prefilled and annotated.
//!
//! # Modules
//!
//! - [`forms`] - Field-level error collection for templates
//! - [`handlers`] - Page and form handlers
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
