//! Repository trait for events.

use crate::domain::entities::{Event, NewEvent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for event persistence.
///
/// Events are append-only from the application's point of view: there is no
/// update or delete here. They disappear only when their club is deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Inserts a new event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// foreign key violation when the club vanished concurrently.
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError>;

    /// Lists every event across all clubs, ordered by start time.
    async fn find_all(&self) -> Result<Vec<Event>, AppError>;

    /// Finds an event by its database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;

    /// Lists the events of one club, ordered by start time.
    async fn find_by_club(&self, club_id: i64) -> Result<Vec<Event>, AppError>;
}
