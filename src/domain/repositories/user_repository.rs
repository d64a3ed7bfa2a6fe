//! Repository trait for users.

use crate::domain::entities::{NewUser, UserEntity};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered users.
///
/// Returned users always have their roles resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user and its role associations atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username or email is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<UserEntity, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>, AppError>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, AppError>;
}
