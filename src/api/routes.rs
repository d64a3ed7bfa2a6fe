//! API route configuration.

use crate::api::handlers::{club_handler, club_list_handler, event_handler, event_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Read-only JSON routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /clubs`        - List clubs (`?query=` searches titles)
/// - `GET /clubs/{id}`   - Single club
/// - `GET /events`       - List events
/// - `GET /events/{id}`  - Single event
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(club_list_handler))
        .route("/clubs/{id}", get(club_handler))
        .route("/events", get(event_list_handler))
        .route("/events/{id}", get(event_handler))
}
