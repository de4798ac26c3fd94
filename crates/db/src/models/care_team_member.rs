//! Care team member entity model.

use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `care_team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareTeamMember {
    pub id: DbId,
    pub name: String,
    pub avatar: String,
    pub affirmed: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
