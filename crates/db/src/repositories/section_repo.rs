//! Repository for the `sections` table.

use sqlx::PgPool;

use crate::models::section::{Section, SectionWithQuestions};
use crate::repositories::MainQuestionRepo;

/// Column list for the `sections` table.
const COLUMNS: &str = "id, key, title, description, sort_order, created_at, updated_at";

/// Read access to the seeded section hierarchy.
pub struct SectionRepo;

impl SectionRepo {
    /// List all sections in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections ORDER BY sort_order, key");
        sqlx::query_as::<_, Section>(&query).fetch_all(pool).await
    }

    /// Find a section by its client-facing key.
    pub async fn find_by_key(pool: &PgPool, key: &str) -> Result<Option<Section>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE key = $1");
        sqlx::query_as::<_, Section>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all sections with their ordered main questions.
    pub async fn list_with_questions(
        pool: &PgPool,
    ) -> Result<Vec<SectionWithQuestions>, sqlx::Error> {
        let sections = Self::list(pool).await?;
        let mut result = Vec::with_capacity(sections.len());

        for section in sections {
            let questions = MainQuestionRepo::list_for_section(pool, section.id).await?;
            result.push(SectionWithQuestions { section, questions });
        }

        Ok(result)
    }

    /// Find a section by key, enriched with its main questions.
    pub async fn find_by_key_with_questions(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<SectionWithQuestions>, sqlx::Error> {
        match Self::find_by_key(pool, key).await? {
            Some(section) => {
                let questions = MainQuestionRepo::list_for_section(pool, section.id).await?;
                Ok(Some(SectionWithQuestions { section, questions }))
            }
            None => Ok(None),
        }
    }
}
