mod common;

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .nest("/api", runner_app::api::routes::routes())
        .with_state(common::create_test_state(pool));
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_api_clubs_list(pool: PgPool) {
    common::create_test_club(&pool, "Harriers").await;
    common::create_test_club(&pool, "Striders").await;
    let server = make_server(pool);

    let response = server.get("/api/clubs").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Harriers");
    assert!(items[0]["id"].is_i64());
}

#[sqlx::test]
async fn test_api_clubs_search(pool: PgPool) {
    common::create_test_club(&pool, "Running Club").await;
    common::create_test_club(&pool, "Cycling").await;
    let server = make_server(pool);

    let response = server.get("/api/clubs").add_query_param("query", "RUN").await;

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Running Club");
}

#[sqlx::test]
async fn test_api_club_by_id(pool: PgPool) {
    let id = common::create_test_club(&pool, "Harriers").await;
    let server = make_server(pool);

    let response = server.get(&format!("/api/clubs/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["content"], "About Harriers");
}

#[sqlx::test]
async fn test_api_club_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/clubs/424242").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["id"], 424242);
}

#[sqlx::test]
async fn test_api_events_use_type_key(pool: PgPool) {
    let id = common::create_test_club(&pool, "Harriers").await;
    common::create_test_event(&pool, id, "Autumn 5K").await;
    let server = make_server(pool);

    let response = server.get("/api/events").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let event = &json["items"][0];
    assert_eq!(event["name"], "Autumn 5K");
    assert_eq!(event["type"], "Race");
    assert!(event.get("club_id").is_none());
}

#[sqlx::test]
async fn test_api_event_by_id(pool: PgPool) {
    let club_id = common::create_test_club(&pool, "Harriers").await;
    let id = common::create_test_event(&pool, club_id, "Autumn 5K").await;
    let server = make_server(pool);

    let response = server.get(&format!("/api/events/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["start_time"], "2024-09-01T09:00");
}

#[sqlx::test]
async fn test_api_event_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/events/424242").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
