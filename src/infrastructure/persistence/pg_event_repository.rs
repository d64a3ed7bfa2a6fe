//! PostgreSQL implementation of the event repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Event, NewEvent};
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct EventRow {
    id: i64,
    club_id: i64,
    name: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    event_type: String,
    photo_url: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(r: EventRow) -> Self {
        Event::new(
            r.id,
            r.club_id,
            r.name,
            r.start_time,
            r.end_time,
            r.event_type,
            r.photo_url,
            r.created_on,
            r.updated_on,
        )
    }
}

/// PostgreSQL repository for events.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, new_event: NewEvent) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (club_id, name, start_time, end_time, event_type, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, club_id, name, start_time, end_time, event_type, photo_url,
                      created_on, updated_on
            "#,
        )
        .bind(new_event.club_id)
        .bind(new_event.name)
        .bind(new_event.start_time)
        .bind(new_event.end_time)
        .bind(new_event.event_type)
        .bind(new_event.photo_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, club_id, name, start_time, end_time, event_type, photo_url,
                   created_on, updated_on
            FROM events
            ORDER BY start_time, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, club_id, name, start_time, end_time, event_type, photo_url,
                   created_on, updated_on
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Event::from))
    }

    async fn find_by_club(&self, club_id: i64) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, club_id, name, start_time, end_time, event_type, photo_url,
                   created_on, updated_on
            FROM events
            WHERE club_id = $1
            ORDER BY start_time, id
            "#,
        )
        .bind(club_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
