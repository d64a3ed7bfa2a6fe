//! Event management service.

use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::application::dto::EventDto;
use crate::domain::repositories::{ClubRepository, EventRepository};
use crate::error::AppError;

/// Service for club events.
///
/// Events can be created and listed; updating, deleting and searching them
/// is not offered.
pub struct EventService<E: EventRepository, C: ClubRepository> {
    event_repository: Arc<E>,
    club_repository: Arc<C>,
}

impl<E: EventRepository, C: ClubRepository> EventService<E, C> {
    /// Creates a new event service.
    pub fn new(event_repository: Arc<E>, club_repository: Arc<C>) -> Self {
        Self {
            event_repository,
            club_repository,
        }
    }

    /// Creates an event owned by the club at `club_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the club does not exist; nothing is written.
    /// Returns [`AppError::Validation`] if a required field is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_event(&self, club_id: i64, event: EventDto) -> Result<EventDto, AppError> {
        if self.club_repository.find_by_id(club_id).await?.is_none() {
            return Err(AppError::not_found(
                "Club not found",
                json!({ "club_id": club_id }),
            ));
        }

        event.validate()?;

        let created = self
            .event_repository
            .create(event.into_new_event(club_id)?)
            .await?;
        tracing::info!(event_id = created.id, club_id, "Event created");

        Ok(created.into())
    }

    /// Lists every event regardless of club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all_events(&self) -> Result<Vec<EventDto>, AppError> {
        let events = self.event_repository.find_all().await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Retrieves an event by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the event does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_event_by_id(&self, event_id: i64) -> Result<EventDto, AppError> {
        self.event_repository
            .find_by_id(event_id)
            .await?
            .map(EventDto::from)
            .ok_or_else(|| AppError::not_found("Event not found", json!({ "id": event_id })))
    }

    /// Lists the events of one club.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_events_by_club(&self, club_id: i64) -> Result<Vec<EventDto>, AppError> {
        let events = self.event_repository.find_by_club(club_id).await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
