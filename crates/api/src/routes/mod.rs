pub mod content;
pub mod health;
pub mod responses;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /main-question              main screen question content
/// /questions                  checkpoint metadata map (?question= filter)
/// /choices/{checkpoint_key}   ordered choices for one checkpoint
/// /sections                   list sections with their questions
/// /sections/{key}             one section with questions and checkpoints
/// /team                       care team members (read-only)
/// /responses                  submit (POST), list with filters (GET)
/// /responses/{id}             one aggregate detail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Read-only questionnaire content.
        .merge(content::router())
        // Care team members.
        .nest("/team", team::router())
        // Response submission and retrieval.
        .nest("/responses", responses::router())
}
