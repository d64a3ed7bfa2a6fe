//! PostgreSQL implementation of the club repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Club, ClubChanges, NewClub};
use crate::domain::repositories::ClubRepository;
use crate::error::AppError;
use crate::utils::search::contains_pattern;

#[derive(FromRow)]
struct ClubRow {
    id: i64,
    title: String,
    photo_url: String,
    content: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl From<ClubRow> for Club {
    fn from(r: ClubRow) -> Self {
        Club::new(
            r.id,
            r.title,
            r.photo_url,
            r.content,
            r.created_on,
            r.updated_on,
        )
    }
}

/// PostgreSQL repository for clubs.
///
/// Deleting a club cascades to its events at the schema level.
pub struct PgClubRepository {
    pool: Arc<PgPool>,
}

impl PgClubRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PgClubRepository {
    async fn find_all(&self) -> Result<Vec<Club>, AppError> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, title, photo_url, content, created_on, updated_on
            FROM clubs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Club>, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, title, photo_url, content, created_on, updated_on
            FROM clubs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Club::from))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Club>, AppError> {
        // Titles are not unique; the oldest match wins.
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, title, photo_url, content, created_on, updated_on
            FROM clubs
            WHERE title = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Club::from))
    }

    async fn search(&self, query: &str) -> Result<Vec<Club>, AppError> {
        let rows = sqlx::query_as::<_, ClubRow>(
            r#"
            SELECT id, title, photo_url, content, created_on, updated_on
            FROM clubs
            WHERE LOWER(title) LIKE LOWER($1) ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(query))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Club::from).collect())
    }

    async fn create(&self, new_club: NewClub) -> Result<Club, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            INSERT INTO clubs (title, photo_url, content)
            VALUES ($1, $2, $3)
            RETURNING id, title, photo_url, content, created_on, updated_on
            "#,
        )
        .bind(new_club.title)
        .bind(new_club.photo_url)
        .bind(new_club.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, changes: ClubChanges) -> Result<Club, AppError> {
        let row = sqlx::query_as::<_, ClubRow>(
            r#"
            UPDATE clubs SET
                title      = $2,
                photo_url  = $3,
                content    = $4,
                updated_on = NOW()
            WHERE id = $1
            RETURNING id, title, photo_url, content, created_on, updated_on
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.photo_url)
        .bind(changes.content)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Club::from)
            .ok_or_else(|| AppError::not_found("Club not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Club not found", json!({ "id": id })));
        }

        Ok(())
    }
}
