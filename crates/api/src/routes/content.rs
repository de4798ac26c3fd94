//! Route definitions for the read-only content surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes merged directly into `/api/v1`.
///
/// ```text
/// GET /main-question              -> main_question
/// GET /questions                  -> questions
/// GET /choices/{checkpoint_key}   -> choices
/// GET /sections                   -> sections
/// GET /sections/{key}             -> section_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/main-question", get(content::main_question))
        .route("/questions", get(content::questions))
        .route("/choices/{checkpoint_key}", get(content::choices))
        .route("/sections", get(content::sections))
        .route("/sections/{key}", get(content::section_detail))
}
