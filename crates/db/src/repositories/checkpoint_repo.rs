//! Repository for the `checkpoints` table.

use sqlx::PgPool;

use awfm_core::types::DbId;

use crate::models::checkpoint::Checkpoint;

/// Column list for the `checkpoints` table.
const COLUMNS: &str = "id, main_question_id, key, checkpoint_number, checkpoint_type, \
    title, subtitle, checkpoint_label, instruction, sort_order, created_at, updated_at";

/// Read access to the seeded checkpoints.
pub struct CheckpointRepo;

impl CheckpointRepo {
    /// List every checkpoint, grouped by question and ordered by number.
    pub async fn list(pool: &PgPool) -> Result<Vec<Checkpoint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkpoints ORDER BY main_question_id, checkpoint_number"
        );
        sqlx::query_as::<_, Checkpoint>(&query).fetch_all(pool).await
    }

    /// List the checkpoints of one main question in checkpoint order.
    pub async fn list_for_question(
        pool: &PgPool,
        main_question_id: DbId,
    ) -> Result<Vec<Checkpoint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checkpoints \
             WHERE main_question_id = $1 \
             ORDER BY checkpoint_number"
        );
        sqlx::query_as::<_, Checkpoint>(&query)
            .bind(main_question_id)
            .fetch_all(pool)
            .await
    }

    /// Find a checkpoint by its client-facing key (e.g. `q10a_cp1`).
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Checkpoint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM checkpoints WHERE key = $1");
        sqlx::query_as::<_, Checkpoint>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
