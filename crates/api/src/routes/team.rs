//! Route definitions for the care team surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(team::list))
}
