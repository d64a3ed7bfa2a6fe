//! JSON read endpoints for events.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::list::ListResponse;
use crate::api::error::ApiError;
use crate::application::dto::EventDto;
use crate::state::AppState;

/// Lists every event.
///
/// # Endpoint
///
/// `GET /api/events`
pub async fn event_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EventDto>>, ApiError> {
    let events = state.event_service.find_all_events().await?;
    Ok(Json(events.into()))
}

/// Returns one event.
///
/// # Endpoint
///
/// `GET /api/events/{id}`
pub async fn event_handler(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<EventDto>, ApiError> {
    Ok(Json(state.event_service.find_event_by_id(event_id).await?))
}
