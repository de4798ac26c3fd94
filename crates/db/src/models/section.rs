//! Section entity model.
//!
//! A section is the top of the content hierarchy: an ordered grouping of
//! main questions, seeded once and read-only at request time.

use awfm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::main_question::MainQuestion;

/// A row from the `sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Section {
    pub id: DbId,
    pub key: String,
    pub title: String,
    pub description: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A section enriched with its ordered main questions.
#[derive(Debug, Clone, Serialize)]
pub struct SectionWithQuestions {
    #[serde(flatten)]
    pub section: Section,
    pub questions: Vec<MainQuestion>,
}
