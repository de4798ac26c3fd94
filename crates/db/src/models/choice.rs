//! Choice entity model.

use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `choices` table: a selectable option under a checkpoint.
///
/// Every row carries all nine stage-specific text columns; only the subset
/// owned by the parent checkpoint's stage is populated. `key`
/// (e.g. `q10a_cp1_1`) is the client-facing identifier.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Choice {
    pub id: DbId,
    pub checkpoint_id: DbId,
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub description: String,
    // Stage 1 (position) content
    pub why_this_matters: String,
    pub research_evidence: String,
    pub decision_impact: String,
    // Stage 2 (challenges) content
    pub what_you_are_fighting_for: String,
    pub cooperative_learning: String,
    pub barriers_to_access: String,
    // Stage 3 (change) content
    pub care_team_affirmation: String,
    pub interdependency_at_work: String,
    pub reflection_guidance: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
