//! Event pages: list and the per-club creation form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::application::dto::EventDto;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{FormErrors, into_form_errors};

#[derive(Template, WebTemplate)]
#[template(path = "events-list.html")]
pub struct EventsListTemplate {
    pub events: Vec<EventDto>,
}

#[derive(Template, WebTemplate)]
#[template(path = "events-create.html")]
pub struct EventCreateTemplate {
    pub club_id: i64,
    pub club_title: String,
    pub event: EventDto,
    pub errors: FormErrors,
}

/// `GET /events`
pub async fn events_list_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let events = state.event_service.find_all_events().await?;
    Ok(EventsListTemplate { events }.into_response())
}

/// `GET /events/{club_id}/new`
///
/// 404 when the club does not exist.
pub async fn event_create_form_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Response, AppError> {
    let club = state.club_service.find_club_by_id(club_id).await?;

    Ok(EventCreateTemplate {
        club_id,
        club_title: club.title,
        event: EventDto::default(),
        errors: FormErrors::default(),
    }
    .into_response())
}

/// `POST /events/{club_id}`
///
/// Redirects to the club's detail page on success.
pub async fn event_create_handler(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Form(event): Form<EventDto>,
) -> Result<Response, AppError> {
    match state.event_service.create_event(club_id, event.clone()).await {
        Ok(_) => Ok(Redirect::to(&format!("/clubs/{club_id}/details")).into_response()),
        Err(e) => {
            let errors = into_form_errors(e)?;
            let club = state.club_service.find_club_by_id(club_id).await?;
            Ok(EventCreateTemplate {
                club_id,
                club_title: club.title,
                event,
                errors,
            }
            .into_response())
        }
    }
}
