#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use runner_app::state::AppState;

pub async fn create_test_club(pool: &PgPool, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clubs (title, photo_url, content) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind("https://img.example.com/club.png")
    .bind(format!("About {title}"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_event(pool: &PgPool, club_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO events (club_id, name, start_time, end_time, event_type, photo_url)
        VALUES ($1, $2, '2024-09-01 09:00', '2024-09-01 11:00', 'Race', 'https://img.example.com/e.png')
        RETURNING id
        "#,
    )
    .bind(club_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn remove_default_role(pool: &PgPool) {
    sqlx::query("DELETE FROM roles WHERE name = 'USER'")
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// Server with every page route mounted, as in production.
pub fn create_web_server(pool: PgPool) -> TestServer {
    let app = runner_app::web::routes::routes().with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}
