//! DTO for user registration.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

/// Sign-up form submission.
///
/// Holds the plaintext password only for the duration of the request; it is
/// hashed before it reaches the repository. `Debug` redacts it.
#[derive(Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl fmt::Debug for RegistrationDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDto")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
