//! Response aggregate models.
//!
//! A [`QuestionResponse`] is the per (user, main question) aggregate; a
//! [`CheckpointResponse`] records that one checkpoint was answered. The
//! selected choices live in the `checkpoint_response_choices` junction and
//! surface here as ordered key lists on the detail views.

use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `question_responses` table.
///
/// `is_complete` is stored but derived: it is recomputed from row counts
/// inside every submission transaction, never tracked incrementally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionResponse {
    pub id: DbId,
    pub user_id: String,
    pub main_question_id: DbId,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `checkpoint_responses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CheckpointResponse {
    pub id: DbId,
    pub question_response_id: DbId,
    pub checkpoint_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A checkpoint response enriched with its checkpoint key and the keys of
/// the selected choices (in choice sort order). An empty key list is a
/// legitimate "answered with no selection".
#[derive(Debug, Clone, Serialize)]
pub struct CheckpointResponseDetail {
    #[serde(flatten)]
    pub checkpoint_response: CheckpointResponse,
    pub checkpoint_key: String,
    pub checkpoint_number: i32,
    pub selected_choice_keys: Vec<String>,
}

/// The full aggregate view: the question response with its checkpoint
/// responses in checkpoint order.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponseDetail {
    #[serde(flatten)]
    pub response: QuestionResponse,
    pub question_key: String,
    pub checkpoints: Vec<CheckpointResponseDetail>,
}

/// Result of a submission: the two upserted rows plus whether the
/// aggregate was created by this submission (drives 201 vs 200).
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub response: QuestionResponse,
    pub checkpoint_response: CheckpointResponse,
    pub created: bool,
}

/// Optional filters for listing aggregates.
#[derive(Debug, Clone, Default)]
pub struct ResponseFilter {
    pub user_id: Option<String>,
    pub question_key: Option<String>,
}
