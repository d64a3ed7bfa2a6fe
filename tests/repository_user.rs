mod common;

use sqlx::PgPool;
use std::sync::Arc;
use runner_app::AppError;
use runner_app::domain::entities::{DEFAULT_ROLE, NewUser};
use runner_app::domain::repositories::{RoleRepository, UserRepository};
use runner_app::infrastructure::persistence::{PgRoleRepository, PgUserRepository};

#[sqlx::test]
async fn test_default_role_is_seeded(pool: PgPool) {
    let repo = PgRoleRepository::new(Arc::new(pool));

    let role = repo.find_by_name(DEFAULT_ROLE).await.unwrap();

    assert_eq!(role.unwrap().name, "USER");
}

#[sqlx::test]
async fn test_create_role_duplicate_is_conflict(pool: PgPool) {
    let repo = PgRoleRepository::new(Arc::new(pool));

    let admin = repo.create("ADMIN").await.unwrap();
    assert_eq!(admin.name, "ADMIN");

    let result = repo.create("ADMIN").await;
    assert!(matches!(result, Err(AppError::Conflict { .. })));

    let names: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["ADMIN", "USER"]);
}

async fn new_user(pool: &PgPool, username: &str, email: &str) -> NewUser {
    let role = PgRoleRepository::new(Arc::new(pool.clone()))
        .find_by_name(DEFAULT_ROLE)
        .await
        .unwrap()
        .unwrap();

    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        roles: vec![role],
    }
}

#[sqlx::test]
async fn test_create_user_with_role(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    let user = repo
        .create(new_user(&pool, "alice", "a@x.com").await)
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.role_names(), vec!["USER"]);

    let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);
    assert!(by_name.has_role("USER"));

    let by_email = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(repo.find_by_username("bob").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_username_is_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    repo.create(new_user(&pool, "alice", "a@x.com").await)
        .await
        .unwrap();

    let result = repo
        .create(new_user(&pool, "alice", "other@x.com").await)
        .await;

    match result {
        Err(AppError::Conflict { details, .. }) => {
            assert_eq!(details["constraint"], "users_username_key");
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    // The failed insert left no partial rows behind.
    assert_eq!(common::count_rows(&pool, "users").await, 1);
    assert_eq!(common::count_rows(&pool, "user_roles").await, 1);
}

#[sqlx::test]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    repo.create(new_user(&pool, "alice", "a@x.com").await)
        .await
        .unwrap();

    let result = repo.create(new_user(&pool, "bob", "a@x.com").await).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}
