//! Handlers for response submission and retrieval.
//!
//! Submission is a full-replace upsert: the selected-choice set for the
//! target checkpoint is overwritten and the aggregate's completion flag is
//! recomputed inside the same transaction (see `ResponseRepo::submit`).
//! Response bodies keep snake_case field names, matching the storage
//! vocabulary; only the content surface translates to camelCase.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use awfm_core::error::CoreError;
use awfm_core::types::DbId;
use awfm_db::models::checkpoint::Checkpoint;
use awfm_db::models::response::ResponseFilter;
use awfm_db::repositories::{CheckpointRepo, ChoiceRepo, ResponseRepo};

use crate::error::{AppError, AppResult};
use crate::query::ResponseFilterParams;
use crate::state::AppState;

/// Request body for submitting one checkpoint's selections.
///
/// `question` is the checkpoint key (e.g. `q10a_cp1`) and
/// `selected_choice_ids` holds choice keys owned by that checkpoint. An
/// empty selection is a valid "skip" answer and still marks the checkpoint
/// as answered.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitResponseRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
    pub question: String,
    #[serde(default)]
    pub selected_choice_ids: Vec<String>,
}

/// POST /api/v1/responses
///
/// Upsert: 201 when this submission created the (user, question) aggregate,
/// 200 when it updated an existing one. The body is the aggregate detail.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitResponseRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let checkpoint = CheckpointRepo::find_by_key(&state.pool, &input.question)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::UnknownKey {
                entity: "Checkpoint",
                key: input.question.clone(),
            })
        })?;

    let choice_ids =
        resolve_choice_keys(&state, &checkpoint, &input.selected_choice_ids).await?;

    let outcome =
        ResponseRepo::submit(&state.pool, &input.user_id, &checkpoint, &choice_ids).await?;
    let detail = ResponseRepo::find_detail(&state.pool, outcome.response.id)
        .await?
        .expect("just written");

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(detail)))
}

/// GET /api/v1/responses?user_id=&question=
///
/// List aggregate details, newest first. Both filters are optional;
/// `question` matches the main-question key.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ResponseFilterParams>,
) -> AppResult<impl IntoResponse> {
    let filter = ResponseFilter {
        user_id: params.user_id,
        question_key: params.question,
    };
    let details = ResponseRepo::list_detail(&state.pool, &filter).await?;
    Ok(Json(details))
}

/// GET /api/v1/responses/{id}
///
/// One aggregate detail by internal ID; 404 if unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = ResponseRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QuestionResponse",
            id,
        }))?;
    Ok(Json(detail))
}

/// Resolve submitted choice keys to row ids, rejecting any key that is not
/// a choice of the target checkpoint. The whole submission is rejected
/// before anything is written.
async fn resolve_choice_keys(
    state: &AppState,
    checkpoint: &Checkpoint,
    keys: &[String],
) -> Result<Vec<DbId>, AppError> {
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let found = ChoiceRepo::find_by_keys(&state.pool, checkpoint.id, keys).await?;
    if let Some(missing) = keys.iter().find(|k| !found.iter().any(|c| &c.key == *k)) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "choice '{missing}' does not belong to checkpoint '{}'",
            checkpoint.key
        ))));
    }

    Ok(found.into_iter().map(|c| c.id).collect())
}
