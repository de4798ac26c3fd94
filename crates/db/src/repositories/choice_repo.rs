//! Repository for the `choices` table.

use sqlx::PgPool;

use awfm_core::types::DbId;

use crate::models::choice::Choice;

/// Column list for the `choices` table.
const COLUMNS: &str = "id, checkpoint_id, key, title, subtitle, image, description, \
    why_this_matters, research_evidence, decision_impact, \
    what_you_are_fighting_for, cooperative_learning, barriers_to_access, \
    care_team_affirmation, interdependency_at_work, reflection_guidance, \
    sort_order, created_at, updated_at";

/// Read access to the seeded choices.
pub struct ChoiceRepo;

impl ChoiceRepo {
    /// List the choices of one checkpoint in display order.
    pub async fn list_for_checkpoint(
        pool: &PgPool,
        checkpoint_id: DbId,
    ) -> Result<Vec<Choice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM choices \
             WHERE checkpoint_id = $1 \
             ORDER BY sort_order, key"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(checkpoint_id)
            .fetch_all(pool)
            .await
    }

    /// Resolve choice keys within one checkpoint.
    ///
    /// Returns only the choices of `checkpoint_id` whose key appears in
    /// `keys`; a submitted key belonging to a different checkpoint (or to
    /// nothing) is simply absent from the result, which the caller treats
    /// as a validation failure.
    pub async fn find_by_keys(
        pool: &PgPool,
        checkpoint_id: DbId,
        keys: &[String],
    ) -> Result<Vec<Choice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM choices \
             WHERE checkpoint_id = $1 AND key = ANY($2) \
             ORDER BY sort_order, key"
        );
        sqlx::query_as::<_, Choice>(&query)
            .bind(checkpoint_id)
            .bind(keys)
            .fetch_all(pool)
            .await
    }
}
