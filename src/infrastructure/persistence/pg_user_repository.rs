//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::pg_role_repository::RoleRow;
use crate::domain::entities::{NewUser, Role, UserEntity};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password: String,
}

/// PostgreSQL repository for users and the `user_roles` association.
///
/// Inserts run in a transaction so a user never exists without its roles.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_roles(&self, user_id: i64) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn with_roles(&self, row: Option<UserRow>) -> Result<Option<UserEntity>, AppError> {
        let Some(row) = row else {
            return Ok(None);
        };

        let roles = self.load_roles(row.id).await?;
        Ok(Some(UserEntity::new(
            row.id,
            row.username,
            row.email,
            row.password,
            roles,
        )))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<UserEntity, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&mut *tx)
        .await?;

        for role in &new_user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(role.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(UserEntity::new(
            row.id,
            row.username,
            row.email,
            row.password,
            new_user.roles,
        ))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_roles(row).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        self.with_roles(row).await
    }
}
