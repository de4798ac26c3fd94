//! Repository for the `main_questions` table.

use sqlx::PgPool;

use awfm_core::types::DbId;

use crate::models::main_question::{MainQuestion, MainScreenQuestion};

/// Column list for the `main_questions` table.
const COLUMNS: &str = "id, section_id, key, title, subtitle, sort_order, created_at, updated_at";

/// Read access to the seeded main questions.
pub struct MainQuestionRepo;

impl MainQuestionRepo {
    /// List all main questions in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MainQuestion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM main_questions ORDER BY sort_order, key");
        sqlx::query_as::<_, MainQuestion>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the main questions of one section in display order.
    pub async fn list_for_section(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<MainQuestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM main_questions \
             WHERE section_id = $1 \
             ORDER BY sort_order, key"
        );
        sqlx::query_as::<_, MainQuestion>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Find a main question by its client-facing key.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<MainQuestion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM main_questions WHERE key = $1");
        sqlx::query_as::<_, MainQuestion>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// The first main question in section/question order, joined with its
    /// section title. `None` when nothing is seeded.
    pub async fn main_screen(pool: &PgPool) -> Result<Option<MainScreenQuestion>, sqlx::Error> {
        sqlx::query_as::<_, MainScreenQuestion>(
            "SELECT mq.title, mq.subtitle, s.title AS section_label \
             FROM main_questions mq \
             JOIN sections s ON s.id = mq.section_id \
             ORDER BY s.sort_order, mq.sort_order \
             LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
