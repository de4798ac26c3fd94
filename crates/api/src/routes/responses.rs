//! Route definitions for response submission and retrieval.

use axum::routing::get;
use axum::Router;

use crate::handlers::responses;
use crate::state::AppState;

/// Routes mounted at `/responses`.
///
/// ```text
/// GET  /        -> list (?user_id=&question=)
/// POST /        -> submit (upsert; 201 created / 200 updated)
/// GET  /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(responses::list).post(responses::submit))
        .route("/{id}", get(responses::get_by_id))
}
