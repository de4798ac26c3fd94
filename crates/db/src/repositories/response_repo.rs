//! Repository for the `question_responses` and `checkpoint_responses`
//! tables plus the selected-choice junction.
//!
//! [`ResponseRepo::submit`] is the only write path. It runs as a single
//! transaction so the checkpoint-response upsert and the completion
//! recount are atomic together; the completion flag is always recomputed
//! from persisted row counts, never tracked incrementally.

use awfm_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::checkpoint::Checkpoint;
use crate::models::response::{
    CheckpointResponse, CheckpointResponseDetail, QuestionResponse, QuestionResponseDetail,
    ResponseFilter, SubmissionOutcome,
};

/// Column list for the `question_responses` table.
const COLUMNS: &str = "id, user_id, main_question_id, is_complete, created_at, updated_at";

/// Column list for `question_responses` with a `qr.` prefix (JOIN queries).
const QR_COLUMNS: &str =
    "qr.id, qr.user_id, qr.main_question_id, qr.is_complete, qr.created_at, qr.updated_at";

/// Column list for the `checkpoint_responses` table.
const CP_COLUMNS: &str = "id, question_response_id, checkpoint_id, created_at, updated_at";

/// Row shape for checkpoint responses joined with their checkpoint.
#[derive(Debug, FromRow)]
struct CheckpointResponseRow {
    id: DbId,
    question_response_id: DbId,
    checkpoint_id: DbId,
    created_at: Timestamp,
    updated_at: Timestamp,
    checkpoint_key: String,
    checkpoint_number: i32,
}

/// Provides the response-aggregation write path and its read views.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Record a user's choice selections for one checkpoint.
    ///
    /// Find-or-creates the (user, main question) aggregate and the
    /// (aggregate, checkpoint) response row, replaces the selected-choice
    /// set with `choice_ids` (a full overwrite; empty is a valid "skip"),
    /// and recomputes the aggregate's completion flag by recount.
    ///
    /// Concurrent submissions for the same key serialize on the unique
    /// constraints via `ON CONFLICT`: exactly one row per key survives and
    /// the last committed selection set wins. Callers must have validated
    /// that every id in `choice_ids` belongs to `checkpoint` (see
    /// `ChoiceRepo::find_by_keys`).
    pub async fn submit(
        pool: &PgPool,
        user_id: &str,
        checkpoint: &Checkpoint,
        choice_ids: &[DbId],
    ) -> Result<SubmissionOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Whether the aggregate pre-existed decides 200 vs 201 at the API.
        let existing: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM question_responses WHERE user_id = $1 AND main_question_id = $2",
        )
        .bind(user_id)
        .bind(checkpoint.main_question_id)
        .fetch_optional(&mut *tx)
        .await?;

        let upsert_response = format!(
            "INSERT INTO question_responses (user_id, main_question_id) \
             VALUES ($1, $2) \
             ON CONFLICT (user_id, main_question_id) \
             DO UPDATE SET updated_at = now() \
             RETURNING {COLUMNS}"
        );
        let response = sqlx::query_as::<_, QuestionResponse>(&upsert_response)
            .bind(user_id)
            .bind(checkpoint.main_question_id)
            .fetch_one(&mut *tx)
            .await?;

        let upsert_checkpoint = format!(
            "INSERT INTO checkpoint_responses (question_response_id, checkpoint_id) \
             VALUES ($1, $2) \
             ON CONFLICT (question_response_id, checkpoint_id) \
             DO UPDATE SET updated_at = now() \
             RETURNING {CP_COLUMNS}"
        );
        let checkpoint_response = sqlx::query_as::<_, CheckpointResponse>(&upsert_checkpoint)
            .bind(response.id)
            .bind(checkpoint.id)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_choices_inner(&mut tx, checkpoint_response.id, choice_ids).await?;

        // Recount instead of increment: the flag stays derivable from row
        // counts no matter what state a previous write left behind.
        let recount = format!(
            "UPDATE question_responses SET \
                is_complete = \
                    (SELECT COUNT(*) FROM checkpoint_responses \
                     WHERE question_response_id = question_responses.id) = \
                    (SELECT COUNT(*) FROM checkpoints \
                     WHERE main_question_id = question_responses.main_question_id), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let response = sqlx::query_as::<_, QuestionResponse>(&recount)
            .bind(response.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(SubmissionOutcome {
            response,
            checkpoint_response,
            created: existing.is_none(),
        })
    }

    /// Find an aggregate by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<QuestionResponse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM question_responses WHERE id = $1");
        sqlx::query_as::<_, QuestionResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the aggregate for a (user, main question) pair. `None` means
    /// the user has not begun that question; it is not an error.
    pub async fn find_by_user_and_question(
        pool: &PgPool,
        user_id: &str,
        main_question_id: DbId,
    ) -> Result<Option<QuestionResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM question_responses \
             WHERE user_id = $1 AND main_question_id = $2"
        );
        sqlx::query_as::<_, QuestionResponse>(&query)
            .bind(user_id)
            .bind(main_question_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an aggregate by ID, enriched with its checkpoint responses and
    /// each one's selected choice keys.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionResponseDetail>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(response) => Ok(Some(Self::build_detail(pool, response).await?)),
            None => Ok(None),
        }
    }

    /// List aggregates matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ResponseFilter,
    ) -> Result<Vec<QuestionResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {QR_COLUMNS} FROM question_responses qr \
             JOIN main_questions mq ON mq.id = qr.main_question_id \
             WHERE ($1::text IS NULL OR qr.user_id = $1) \
               AND ($2::text IS NULL OR mq.key = $2) \
             ORDER BY qr.created_at DESC, qr.id DESC"
        );
        sqlx::query_as::<_, QuestionResponse>(&query)
            .bind(&filter.user_id)
            .bind(&filter.question_key)
            .fetch_all(pool)
            .await
    }

    /// List aggregates matching the filter, each with full detail.
    pub async fn list_detail(
        pool: &PgPool,
        filter: &ResponseFilter,
    ) -> Result<Vec<QuestionResponseDetail>, sqlx::Error> {
        let responses = Self::list(pool, filter).await?;
        let mut result = Vec::with_capacity(responses.len());

        for response in responses {
            result.push(Self::build_detail(pool, response).await?);
        }

        Ok(result)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace the selected-choice set within an existing transaction.
    ///
    /// Deletes the previous set, then inserts the new one -- a full
    /// overwrite, not a union or diff.
    async fn set_choices_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        checkpoint_response_id: DbId,
        choice_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM checkpoint_response_choices WHERE checkpoint_response_id = $1")
            .bind(checkpoint_response_id)
            .execute(&mut **tx)
            .await?;

        for &choice_id in choice_ids {
            sqlx::query(
                "INSERT INTO checkpoint_response_choices (checkpoint_response_id, choice_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(checkpoint_response_id)
            .bind(choice_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Assemble the detail view for one aggregate row.
    async fn build_detail(
        pool: &PgPool,
        response: QuestionResponse,
    ) -> Result<QuestionResponseDetail, sqlx::Error> {
        let (question_key,): (String,) =
            sqlx::query_as("SELECT key FROM main_questions WHERE id = $1")
                .bind(response.main_question_id)
                .fetch_one(pool)
                .await?;

        let rows = sqlx::query_as::<_, CheckpointResponseRow>(
            "SELECT cr.id, cr.question_response_id, cr.checkpoint_id, \
                    cr.created_at, cr.updated_at, \
                    c.key AS checkpoint_key, c.checkpoint_number \
             FROM checkpoint_responses cr \
             JOIN checkpoints c ON c.id = cr.checkpoint_id \
             WHERE cr.question_response_id = $1 \
             ORDER BY c.checkpoint_number",
        )
        .bind(response.id)
        .fetch_all(pool)
        .await?;

        let mut checkpoints = Vec::with_capacity(rows.len());
        for row in rows {
            let keys: Vec<(String,)> = sqlx::query_as(
                "SELECT ch.key FROM checkpoint_response_choices crc \
                 JOIN choices ch ON ch.id = crc.choice_id \
                 WHERE crc.checkpoint_response_id = $1 \
                 ORDER BY ch.sort_order, ch.key",
            )
            .bind(row.id)
            .fetch_all(pool)
            .await?;

            checkpoints.push(CheckpointResponseDetail {
                checkpoint_response: CheckpointResponse {
                    id: row.id,
                    question_response_id: row.question_response_id,
                    checkpoint_id: row.checkpoint_id,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                },
                checkpoint_key: row.checkpoint_key,
                checkpoint_number: row.checkpoint_number,
                selected_choice_keys: keys.into_iter().map(|(k,)| k).collect(),
            });
        }

        Ok(QuestionResponseDetail {
            response,
            question_key,
            checkpoints,
        })
    }
}
