//! Handlers for the read-only questionnaire content surface.
//!
//! Storage uses snake_case; the client expects camelCase. The wire structs
//! in this module are the single place that mapping happens -- handlers
//! and repositories never see wire names.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use awfm_core::error::CoreError;
use awfm_db::models::checkpoint::Checkpoint;
use awfm_db::models::choice::Choice;
use awfm_db::models::main_question::MainQuestion;
use awfm_db::models::section::SectionWithQuestions;
use awfm_db::repositories::{CheckpointRepo, ChoiceRepo, MainQuestionRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::query::QuestionFilterParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Main screen question content. Empty strings when nothing is seeded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainScreenView {
    pub title: String,
    pub subtitle: String,
    pub section_label: String,
}

/// One entry in the questions map.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointInfo {
    pub title: String,
    pub subtitle: String,
    pub checkpoint_label: String,
    pub instruction: String,
}

impl From<Checkpoint> for CheckpointInfo {
    fn from(c: Checkpoint) -> Self {
        Self {
            title: c.title,
            subtitle: c.subtitle,
            checkpoint_label: c.checkpoint_label,
            instruction: c.instruction,
        }
    }
}

/// A checkpoint in the section detail view, with its stage metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointSummary {
    pub key: String,
    pub checkpoint_number: i32,
    pub checkpoint_type: String,
    pub title: String,
    pub subtitle: String,
    pub checkpoint_label: String,
    pub instruction: String,
}

impl From<Checkpoint> for CheckpointSummary {
    fn from(c: Checkpoint) -> Self {
        Self {
            key: c.key,
            checkpoint_number: c.checkpoint_number,
            checkpoint_type: c.checkpoint_type,
            title: c.title,
            subtitle: c.subtitle,
            checkpoint_label: c.checkpoint_label,
            instruction: c.instruction,
        }
    }
}

/// A choice with its full stage-specific content. `id` is the client-facing
/// choice key; all nine stage columns are present on every choice, with the
/// ones the owning stage does not use left as empty strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub description: String,
    pub why_this_matters: String,
    pub research_evidence: String,
    pub decision_impact: String,
    pub what_you_are_fighting_for: String,
    pub cooperative_learning: String,
    pub barriers_to_access: String,
    pub care_team_affirmation: String,
    pub interdependency_at_work: String,
    pub reflection_guidance: String,
}

impl From<Choice> for ChoiceView {
    fn from(c: Choice) -> Self {
        Self {
            id: c.key,
            title: c.title,
            subtitle: c.subtitle,
            image: c.image,
            description: c.description,
            why_this_matters: c.why_this_matters,
            research_evidence: c.research_evidence,
            decision_impact: c.decision_impact,
            what_you_are_fighting_for: c.what_you_are_fighting_for,
            cooperative_learning: c.cooperative_learning,
            barriers_to_access: c.barriers_to_access,
            care_team_affirmation: c.care_team_affirmation,
            interdependency_at_work: c.interdependency_at_work,
            reflection_guidance: c.reflection_guidance,
        }
    }
}

/// A main question in the sections list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    pub key: String,
    pub title: String,
    pub subtitle: String,
}

impl From<MainQuestion> for QuestionSummary {
    fn from(q: MainQuestion) -> Self {
        Self {
            key: q.key,
            title: q.title,
            subtitle: q.subtitle,
        }
    }
}

/// A section with its ordered main questions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionSummary>,
}

impl From<SectionWithQuestions> for SectionView {
    fn from(s: SectionWithQuestions) -> Self {
        Self {
            key: s.section.key,
            title: s.section.title,
            description: s.section.description,
            questions: s.questions.into_iter().map(QuestionSummary::from).collect(),
        }
    }
}

/// A main question in the section detail view, with its checkpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetailView {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub checkpoints: Vec<CheckpointSummary>,
}

/// Full section detail: questions, each with its three checkpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDetailView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDetailView>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/main-question
///
/// The first main question with its section label, or empty defaults if
/// nothing is seeded (never a 404).
pub async fn main_question(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let view = match MainQuestionRepo::main_screen(&state.pool).await? {
        Some(q) => MainScreenView {
            title: q.title,
            subtitle: q.subtitle,
            section_label: q.section_label,
        },
        None => MainScreenView {
            title: String::new(),
            subtitle: String::new(),
            section_label: String::new(),
        },
    };
    Ok(Json(view))
}

/// GET /api/v1/questions?question=q10a
///
/// Map of checkpoint key to checkpoint metadata. Without the filter the map
/// covers every checkpoint; with it, only the named question's three.
pub async fn questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionFilterParams>,
) -> AppResult<impl IntoResponse> {
    let checkpoints = match params.question {
        Some(ref key) => {
            let question = MainQuestionRepo::find_by_key(&state.pool, key)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::UnknownKey {
                        entity: "MainQuestion",
                        key: key.clone(),
                    })
                })?;
            CheckpointRepo::list_for_question(&state.pool, question.id).await?
        }
        None => CheckpointRepo::list(&state.pool).await?,
    };

    let map: BTreeMap<String, CheckpointInfo> = checkpoints
        .into_iter()
        .map(|c| {
            let key = c.key.clone();
            (key, CheckpointInfo::from(c))
        })
        .collect();
    Ok(Json(map))
}

/// GET /api/v1/choices/{checkpoint_key}
///
/// Ordered choices for one checkpoint; 404 if the key is unknown.
pub async fn choices(
    State(state): State<AppState>,
    Path(checkpoint_key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let checkpoint = CheckpointRepo::find_by_key(&state.pool, &checkpoint_key)
        .await?
        .ok_or(AppError::Core(CoreError::UnknownKey {
            entity: "Checkpoint",
            key: checkpoint_key,
        }))?;

    let choices = ChoiceRepo::list_for_checkpoint(&state.pool, checkpoint.id).await?;
    let views: Vec<ChoiceView> = choices.into_iter().map(ChoiceView::from).collect();
    Ok(Json(views))
}

/// GET /api/v1/sections
///
/// All sections with their main questions, in display order.
pub async fn sections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = SectionRepo::list_with_questions(&state.pool).await?;
    let views: Vec<SectionView> = sections.into_iter().map(SectionView::from).collect();
    Ok(Json(views))
}

/// GET /api/v1/sections/{key}
///
/// One section with its questions and their checkpoints; 404 if unknown.
pub async fn section_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let section = SectionRepo::find_by_key_with_questions(&state.pool, &key)
        .await?
        .ok_or(AppError::Core(CoreError::UnknownKey {
            entity: "Section",
            key,
        }))?;

    let mut questions = Vec::with_capacity(section.questions.len());
    for question in section.questions {
        let checkpoints = CheckpointRepo::list_for_question(&state.pool, question.id).await?;
        questions.push(QuestionDetailView {
            key: question.key,
            title: question.title,
            subtitle: question.subtitle,
            checkpoints: checkpoints.into_iter().map(CheckpointSummary::from).collect(),
        });
    }

    Ok(Json(SectionDetailView {
        key: section.section.key,
        title: section.section.title,
        description: section.section.description,
        questions,
    }))
}
