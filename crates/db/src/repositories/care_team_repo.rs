//! Repository for the `care_team_members` table.

use sqlx::PgPool;

use crate::models::care_team_member::CareTeamMember;

/// Column list for the `care_team_members` table.
const COLUMNS: &str = "id, name, avatar, affirmed, sort_order, created_at, updated_at";

/// Read access to the seeded care team.
pub struct CareTeamRepo;

impl CareTeamRepo {
    /// List all care team members in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<CareTeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM care_team_members ORDER BY sort_order, name");
        sqlx::query_as::<_, CareTeamMember>(&query)
            .fetch_all(pool)
            .await
    }
}
