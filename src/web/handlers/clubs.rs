//! Club pages: list, search, detail and the create/edit/delete forms.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::application::dto::{ClubDto, EventDto};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{FormErrors, into_form_errors};

/// Club list, also used for search results.
#[derive(Template, WebTemplate)]
#[template(path = "clubs-list.html")]
pub struct ClubsListTemplate {
    pub clubs: Vec<ClubDto>,
    pub query: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "clubs-create.html")]
pub struct ClubCreateTemplate {
    pub club: ClubDto,
    pub errors: FormErrors,
}

/// Edit form. `club_id` comes from the path so the form posts back to the
/// right club even when redisplayed after a failed submission.
#[derive(Template, WebTemplate)]
#[template(path = "clubs-edit.html")]
pub struct ClubEditTemplate {
    pub club_id: i64,
    pub club: ClubDto,
    pub errors: FormErrors,
}

#[derive(Template, WebTemplate)]
#[template(path = "clubs-detail.html")]
pub struct ClubDetailTemplate {
    pub club_id: i64,
    pub club: ClubDto,
    pub events: Vec<EventDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// `GET /clubs`
pub async fn clubs_list_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let clubs = state.club_service.find_all_clubs().await?;

    Ok(ClubsListTemplate {
        clubs,
        query: String::new(),
    }
    .into_response())
}

/// `GET /clubs/search?query=`
///
/// A blank or missing query lists every club.
pub async fn club_search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let clubs = state.club_service.search_clubs(&params.query).await?;

    Ok(ClubsListTemplate {
        clubs,
        query: params.query,
    }
    .into_response())
}

/// `GET /clubs/new`
pub async fn club_create_form_handler() -> impl IntoResponse {
    ClubCreateTemplate {
        club: ClubDto::default(),
        errors: FormErrors::default(),
    }
}

/// `POST /clubs/new`
///
/// Redirects to the list on success; redisplays the form on validation errors.
pub async fn club_create_handler(
    State(state): State<AppState>,
    Form(club): Form<ClubDto>,
) -> Result<Response, AppError> {
    match state.club_service.save_club(club.clone()).await {
        Ok(_) => Ok(Redirect::to("/clubs").into_response()),
        Err(e) => {
            let errors = into_form_errors(e)?;
            Ok(ClubCreateTemplate { club, errors }.into_response())
        }
    }
}

/// `GET /clubs/{id}/edit`
pub async fn club_edit_form_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Response, AppError> {
    let club = state.club_service.find_club_by_id(club_id).await?;

    Ok(ClubEditTemplate {
        club_id,
        club,
        errors: FormErrors::default(),
    }
    .into_response())
}

/// `POST /clubs/{id}`
///
/// The path id wins over any id in the submitted form.
pub async fn club_update_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Form(club): Form<ClubDto>,
) -> Result<Response, AppError> {
    match state.club_service.update_club(club_id, club.clone()).await {
        Ok(_) => Ok(Redirect::to("/clubs").into_response()),
        Err(e) => {
            let errors = into_form_errors(e)?;
            Ok(ClubEditTemplate {
                club_id,
                club,
                errors,
            }
            .into_response())
        }
    }
}

/// `POST /clubs/{id}/delete`
pub async fn club_delete_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.club_service.delete_club(club_id).await?;
    Ok(Redirect::to("/clubs"))
}

/// `GET /clubs/{id}/details`
///
/// Shows the club together with its events.
pub async fn club_detail_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Response, AppError> {
    let club = state.club_service.find_club_by_id(club_id).await?;
    let events = state.event_service.find_events_by_club(club_id).await?;

    Ok(ClubDetailTemplate {
        club_id,
        club,
        events,
    }
    .into_response())
}
