//! User registration service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::RegistrationDto;
use crate::application::services::password::hash_password;
use crate::domain::entities::{DEFAULT_ROLE, NewUser, Role, UserEntity};
use crate::domain::repositories::{RoleRepository, UserRepository};
use crate::error::AppError;

/// Service for registering users.
///
/// Every new user gets exactly the [`DEFAULT_ROLE`]. That role is seed data;
/// [`UserService::ensure_default_role`] is called at startup so a missing
/// row stops the server instead of failing the first sign-up.
pub struct UserService<U: UserRepository, R: RoleRepository> {
    user_repository: Arc<U>,
    role_repository: Arc<R>,
}

impl<U: UserRepository, R: RoleRepository> UserService<U, R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<U>, role_repository: Arc<R>) -> Self {
        Self {
            user_repository,
            role_repository,
        }
    }

    /// Returns the default role, failing if the seed row is missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PreconditionMissing`] if the role does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn ensure_default_role(&self) -> Result<Role, AppError> {
        self.role_repository
            .find_by_name(DEFAULT_ROLE)
            .await?
            .ok_or_else(|| {
                AppError::precondition_missing(
                    "Default role is not configured",
                    json!({
                        "role": DEFAULT_ROLE,
                        "hint": "Run migrations or `admin role create USER`"
                    }),
                )
            })
    }

    /// Registers a user with the default role.
    ///
    /// The password is hashed before it reaches the repository. Duplicate
    /// usernames or emails are caught only by the store's unique constraints.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is empty.
    /// Returns [`AppError::PreconditionMissing`] if the default role is missing.
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on database or hashing errors.
    pub async fn save_user(&self, registration: RegistrationDto) -> Result<UserEntity, AppError> {
        registration.validate()?;

        let role = self.ensure_default_role().await?;
        let password_hash = hash_password(&registration.password)?;

        let user = self
            .user_repository
            .create(NewUser {
                username: registration.username,
                email: registration.email,
                password_hash,
                roles: vec![role],
            })
            .await?;
        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>, AppError> {
        self.user_repository.find_by_username(username).await
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, AppError> {
        self.user_repository.find_by_email(email).await
    }
}
