//! Sign-up form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::dto::RegistrationDto;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{FormErrors, into_form_errors};

/// Registration form. The password is never echoed back.
#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub username: String,
    pub email: String,
    pub errors: FormErrors,
}

/// `GET /register`
pub async fn register_form_handler() -> impl IntoResponse {
    RegisterTemplate {
        username: String::new(),
        email: String::new(),
        errors: FormErrors::default(),
    }
}

/// `POST /register/save`
///
/// Redirects to the club list on success. Validation failures and taken
/// usernames or emails redisplay the form.
pub async fn register_handler(
    State(state): State<AppState>,
    Form(registration): Form<RegistrationDto>,
) -> Result<Response, AppError> {
    let username = registration.username.clone();
    let email = registration.email.clone();

    let errors = match state.user_service.save_user(registration).await {
        Ok(_) => return Ok(Redirect::to("/clubs").into_response()),
        Err(AppError::Conflict { details, .. }) => {
            tracing::warn!(%username, %details, "Registration rejected: duplicate");
            FormErrors::with_general(duplicate_message(&details))
        }
        Err(e) => into_form_errors(e)?,
    };

    Ok(RegisterTemplate {
        username,
        email,
        errors,
    }
    .into_response())
}

fn duplicate_message(details: &serde_json::Value) -> &'static str {
    match details.get("constraint").and_then(|c| c.as_str()) {
        Some("users_username_key") => "There is already a user with this username",
        Some("users_email_key") => "There is already a user with this email",
        _ => "There is already a user with this username or email",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_duplicate_message_by_constraint() {
        assert_eq!(
            duplicate_message(&json!({ "constraint": "users_email_key" })),
            "There is already a user with this email"
        );
        assert_eq!(
            duplicate_message(&json!({ "constraint": "users_username_key" })),
            "There is already a user with this username"
        );
        assert_eq!(
            duplicate_message(&json!({})),
            "There is already a user with this username or email"
        );
    }
}
