//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    club_create_form_handler, club_create_handler, club_delete_handler, club_detail_handler,
    club_edit_form_handler, club_search_handler, club_update_handler, clubs_list_handler,
    event_create_form_handler, event_create_handler, events_list_handler, home_handler,
    register_form_handler, register_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Page routes.
///
/// # Endpoints
///
/// - `GET  /`                    - Redirect to `/clubs`
/// - `GET  /clubs`               - Club list
/// - `GET  /clubs/search`        - Title search (`?query=`)
/// - `GET  /clubs/new`           - Creation form
/// - `POST /clubs/new`           - Create club
/// - `GET  /clubs/{id}/edit`     - Edit form
/// - `POST /clubs/{id}`          - Update club
/// - `POST /clubs/{id}/delete`   - Delete club and its events
/// - `GET  /clubs/{id}/details`  - Club with its events
/// - `GET  /events`              - Event list
/// - `GET  /events/{club_id}/new`- Event form for a club
/// - `POST /events/{club_id}`    - Create event
/// - `GET  /register`            - Sign-up form
/// - `POST /register/save`       - Register user
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/clubs", get(clubs_list_handler))
        .route("/clubs/search", get(club_search_handler))
        .route(
            "/clubs/new",
            get(club_create_form_handler).post(club_create_handler),
        )
        .route("/clubs/{id}", post(club_update_handler))
        .route("/clubs/{id}/edit", get(club_edit_form_handler))
        .route("/clubs/{id}/delete", post(club_delete_handler))
        .route("/clubs/{id}/details", get(club_detail_handler))
        .route("/events", get(events_list_handler))
        .route("/events/{club_id}/new", get(event_create_form_handler))
        .route("/events/{club_id}", post(event_create_handler))
        .route("/register", get(register_form_handler))
        .route("/register/save", post(register_handler))
}
