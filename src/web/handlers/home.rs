//! Entry point.

use axum::response::Redirect;

/// `GET /` sends visitors to the club list.
pub async fn home_handler() -> Redirect {
    Redirect::to("/clubs")
}
