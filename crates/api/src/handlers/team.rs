//! Handlers for the read-only care team surface.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use awfm_core::types::DbId;
use awfm_db::models::care_team_member::CareTeamMember;
use awfm_db::repositories::CareTeamRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Wire shape for a care team member.
#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    pub id: DbId,
    pub name: String,
    pub avatar: String,
    pub affirmed: bool,
}

impl From<CareTeamMember> for TeamMemberView {
    fn from(m: CareTeamMember) -> Self {
        Self {
            id: m.id,
            name: m.name,
            avatar: m.avatar,
            affirmed: m.affirmed,
        }
    }
}

/// GET /api/v1/team
///
/// All care team members with their affirmation status, in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let members = CareTeamRepo::list(&state.pool).await?;
    let views: Vec<TeamMemberView> = members.into_iter().map(TeamMemberView::from).collect();
    Ok(Json(views))
}
