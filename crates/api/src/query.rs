//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional main-question filter (`?question=`) for the questions map.
#[derive(Debug, Deserialize)]
pub struct QuestionFilterParams {
    pub question: Option<String>,
}

/// Filters for listing response aggregates (`?user_id=&question=`).
///
/// `question` filters by main-question key (e.g. `q10a`).
#[derive(Debug, Deserialize)]
pub struct ResponseFilterParams {
    pub user_id: Option<String>,
    pub question: Option<String>,
}
