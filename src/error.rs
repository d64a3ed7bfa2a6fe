//! Application error taxonomy and its HTTP rendering.
//!
//! Every fallible operation in the service and repository layers returns
//! [`AppError`]. Handlers propagate it with `?`; the [`IntoResponse`] impl turns
//! it into a rendered `error.html` page with the matching status code.
//!
//! | Variant                          | Status | Typical cause                          |
//! |----------------------------------|--------|----------------------------------------|
//! | [`AppError::Validation`]         | 400    | Empty required form field              |
//! | [`AppError::NotFound`]           | 404    | Unknown club/event id                  |
//! | [`AppError::Conflict`]           | 409    | Unique constraint (username, email)    |
//! | [`AppError::PreconditionMissing`]| 500    | Seed data such as the `USER` role gone |
//! | [`AppError::Internal`]           | 500    | Database or hashing failure            |
//!
//! Validation errors normally never reach this renderer: form handlers catch
//! them and redisplay the form (see [`crate::web::forms::FormErrors`]).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::db_error::{foreign_key_violation_constraint, unique_violation_constraint};

/// Errors surfaced by services and repositories.
///
/// Each variant carries a human-readable `message` and structured `details`
/// used for logging and, for validation failures, for field-level messages.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    PreconditionMissing { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn precondition_missing(message: impl Into<String>, details: Value) -> Self {
        Self::PreconditionMissing {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::PreconditionMissing { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Structured context attached to the error.
    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::PreconditionMissing { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

/// Generic error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorPage {
    status: u16,
    reason: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures are logged with their details and shown generically.
        let message = match &self {
            AppError::Internal { .. } | AppError::PreconditionMissing { .. } => {
                tracing::error!(error = %self, details = %self.details(), "Request failed");
                "Something went wrong on our side. Please try again later.".to_string()
            }
            other => {
                tracing::warn!(error = %other, status = status.as_u16(), "Request rejected");
                other.to_string()
            }
        };

        let page = ErrorPage {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message,
        };

        (status, page).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(constraint) = unique_violation_constraint(&e) {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            );
        }

        if let Some(constraint) = foreign_key_violation_constraint(&e) {
            return AppError::not_found(
                "Referenced record not found",
                json!({ "constraint": constraint }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: BTreeMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}
