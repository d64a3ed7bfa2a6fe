//! JSON read endpoints for clubs.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::list::{ListResponse, SearchParams};
use crate::api::error::ApiError;
use crate::application::dto::ClubDto;
use crate::state::AppState;

/// Lists clubs, or searches titles when `query` is present.
///
/// # Endpoint
///
/// `GET /api/clubs?query=run`
pub async fn club_list_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ListResponse<ClubDto>>, ApiError> {
    let clubs = match params.query {
        Some(query) => state.club_service.search_clubs(&query).await?,
        None => state.club_service.find_all_clubs().await?,
    };

    Ok(Json(clubs.into()))
}

/// Returns one club.
///
/// # Endpoint
///
/// `GET /api/clubs/{id}`
///
/// # Errors
///
/// 404 with a `not_found` envelope if the club does not exist.
pub async fn club_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<ClubDto>, ApiError> {
    Ok(Json(state.club_service.find_club_by_id(club_id).await?))
}
