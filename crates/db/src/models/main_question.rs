//! Main question entity model.

use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `main_questions` table. Each main question belongs to
/// exactly one section and owns three checkpoints.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MainQuestion {
    pub id: DbId,
    pub section_id: DbId,
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Projection for the main-screen endpoint: the first main question in
/// section/question order, joined with its section's title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MainScreenQuestion {
    pub title: String,
    pub subtitle: String,
    pub section_label: String,
}
