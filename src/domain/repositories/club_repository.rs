//! Repository trait for clubs.

use crate::domain::entities::{Club, ClubChanges, NewClub};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for club persistence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClubRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Lists every club in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Club>, AppError>;

    /// Finds a club by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Club>, AppError>;

    /// Finds the first club with exactly this title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_title(&self, title: &str) -> Result<Option<Club>, AppError>;

    /// Case-insensitive substring search over titles.
    ///
    /// The query is matched literally; `%` and `_` are not wildcards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, query: &str) -> Result<Vec<Club>, AppError>;

    /// Inserts a new club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_club: NewClub) -> Result<Club, AppError>;

    /// Overwrites the editable fields of an existing club and bumps `updated_on`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, changes: ClubChanges) -> Result<Club, AppError>;

    /// Deletes a club and, through the foreign key, its events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
