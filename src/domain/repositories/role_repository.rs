//! Repository trait for roles.

use crate::domain::entities::Role;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the role lookup table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Finds a role by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AppError>;

    /// Lists all roles ordered by name.
    async fn find_all(&self) -> Result<Vec<Role>, AppError>;

    /// Creates a role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a role with this name exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, name: &str) -> Result<Role, AppError>;
}
