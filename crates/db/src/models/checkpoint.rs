//! Checkpoint entity model.

use awfm_core::error::CoreError;
use awfm_core::stage::CheckpointStage;
use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `checkpoints` table: one of the three fixed stages under
/// a main question. `key` follows the `<question_key>_cp<n>` convention and
/// is the identifier clients use.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Checkpoint {
    pub id: DbId,
    pub main_question_id: DbId,
    pub key: String,
    pub checkpoint_number: i32,
    pub checkpoint_type: String,
    pub title: String,
    pub subtitle: String,
    pub checkpoint_label: String,
    pub instruction: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Checkpoint {
    /// Parse the stored stage tag. The schema constrains `checkpoint_type`
    /// to the three known tags, so an error here means schema drift.
    pub fn stage(&self) -> Result<CheckpointStage, CoreError> {
        self.checkpoint_type.parse()
    }
}
