//! HTTP-level integration tests for the read-only content endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Verifies the camelCase wire mapping that
//! the content handlers apply on top of the snake_case storage.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /api/v1/main-question
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_main_question_returns_first_question(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/main-question").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["subtitle"], "Question 10 A");
    assert_eq!(json["sectionLabel"], "ADVANCE CARE PLANNING (PART 1)");
    assert!(json["title"].as_str().unwrap().contains("physical limitations"));
}

// ---------------------------------------------------------------------------
// GET /api/v1/questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_questions_map_covers_all_checkpoints(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let map = json.as_object().unwrap();

    // 7 questions x 3 checkpoints.
    assert_eq!(map.len(), 21);

    let cp1 = &map["q10a_cp1"];
    assert_eq!(cp1["checkpointLabel"], "Checkpoint 1: Your Position");
    assert_eq!(cp1["subtitle"], "Checkpoint 1");
    assert!(cp1["instruction"].as_str().unwrap().starts_with("Select"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_questions_map_filtered_by_question(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/questions?question=q10a").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 3);
    assert!(map.contains_key("q10a_cp1"));
    assert!(map.contains_key("q10a_cp2"));
    assert!(map.contains_key("q10a_cp3"));

    // Unknown question key is a 404, not an empty map.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions?question=q99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// GET /api/v1/choices/{checkpoint_key}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_choices_returns_camel_case_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/choices/q10a_cp1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let choices = json.as_array().unwrap();
    assert_eq!(choices.len(), 3);

    let first = &choices[0];
    assert_eq!(first["id"], "q10a_cp1_1");
    assert!(!first["whyThisMatters"].as_str().unwrap().is_empty());
    assert!(!first["researchEvidence"].as_str().unwrap().is_empty());
    assert!(!first["decisionImpact"].as_str().unwrap().is_empty());

    // Stage 2 / 3 fields exist on every choice but are empty here.
    assert_eq!(first["whatYouAreFightingFor"], "");
    assert_eq!(first["careTeamAffirmation"], "");

    // Storage names must not leak onto the wire.
    assert!(first.get("why_this_matters").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_choices_unknown_checkpoint_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/choices/q10a_cp9").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// GET /api/v1/sections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sections_list_and_detail(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/sections").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sections = json.as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["key"], "section_3");
    assert_eq!(sections[0]["questions"].as_array().unwrap().len(), 7);
    assert_eq!(sections[0]["questions"][0]["key"], "q10a");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/sections/section_3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 7);
    let checkpoints = questions[0]["checkpoints"].as_array().unwrap();
    assert_eq!(checkpoints.len(), 3);
    assert_eq!(checkpoints[0]["key"], "q10a_cp1");
    assert_eq!(checkpoints[0]["checkpointNumber"], 1);
    assert_eq!(checkpoints[0]["checkpointType"], "position");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sections/section_99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// GET /api/v1/team
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_lists_members_in_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/team").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let members = json.as_array().unwrap();
    assert_eq!(members.len(), 5);
    assert_eq!(members[0]["name"], "Dr. Sarah");
    assert_eq!(members[0]["affirmed"], true);
    assert_eq!(members[2]["affirmed"], false);
    assert!(members[0]["id"].is_number());
}
