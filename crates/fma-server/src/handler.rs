//! Request handlers. Every response uses the `{success, data | error}`
//! envelope; idempotent no-ops add a `message`.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::Utc;
use fma_engine::{UnitKind, UnitUnlock};
use fma_ledger::{ProgressionService, UnitOutcome};
use fma_types::{
    BadgeKey, BadgeRecord, CompletionRecord, LeaderboardEntry, UnitKey, UserId, UserProgress,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ServerError, ServerResult};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: ProgressionService,
}

impl AppState {
    pub fn new(service: ProgressionService) -> Self {
        Self { service }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        message: None,
    })
}

fn ok_with_message<T: Serialize>(data: T, message: &str) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
        message: Some(message.to_owned()),
    })
}

type ApiResult<T> = ServerResult<Json<ApiResponse<T>>>;

/// User progress plus the distance to the next level.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    #[serde(flatten)]
    pub progress: UserProgress,
    pub xp_to_next_level: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogUnitView {
    pub unit_key: UnitKey,
    pub kind: UnitKind,
    pub order: u32,
    pub title: String,
    pub badge_key: BadgeKey,
    pub badge_name: String,
    pub xp_value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SetXpRequest {
    pub xp: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddXpRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStoryRequest {
    pub story_type: String,
    #[serde(default)]
    pub current_scene: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    pub badge_key: String,
    pub badge_name: String,
    #[serde(default)]
    pub xp_awarded: i64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub correct: i64,
    pub total: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteStoryRequest {
    #[serde(default)]
    pub current_scene: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<String>,
}

fn view(state: &AppState, progress: UserProgress) -> ProgressView {
    let xp_to_next_level = state.service.engine().rules().xp_to_next_level(progress.xp);
    ProgressView {
        progress,
        xp_to_next_level,
    }
}

pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Factory Method Adventures API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "catalog": "/api/catalog",
            "users": "/api/users/:userId",
            "xp": "/api/users/:userId/xp",
            "stories": "/api/users/:userId/stories",
            "badges": "/api/users/:userId/badges",
            "unlocks": "/api/users/:userId/unlocks",
            "quizSubmit": "/api/users/:userId/quizzes/:unitKey/submit",
            "storyComplete": "/api/users/:userId/stories/:unitKey/complete",
            "leaderboard": "/api/leaderboard",
        }
    }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now() }))
}

pub async fn catalog_handler(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<CatalogUnitView>>> {
    let catalog = state.service.engine().catalog();
    let units = UnitKind::ALL
        .iter()
        .flat_map(|kind| catalog.track(*kind))
        .map(|u| CatalogUnitView {
            unit_key: u.key.clone(),
            kind: u.kind,
            order: u.order,
            title: u.title.clone(),
            badge_key: u.badge.key.clone(),
            badge_name: u.badge.name.clone(),
            xp_value: u.badge.xp_value,
            question_count: u.question_count,
        })
        .collect();
    ok(units)
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<ProgressView> {
    let user = UserId::new(user_id)?;
    let progress = state.service.get_or_create_user(&user)?;
    Ok(ok(view(&state, progress)))
}

pub async fn set_xp_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<SetXpRequest>, JsonRejection>,
) -> ApiResult<ProgressView> {
    let user = UserId::new(user_id)?;
    let Json(req) = body?;
    let progress = state.service.set_xp(&user, req.xp)?;
    Ok(ok(view(&state, progress)))
}

pub async fn add_xp_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<AddXpRequest>, JsonRejection>,
) -> ApiResult<ProgressView> {
    let user = UserId::new(user_id)?;
    let Json(req) = body?;
    let progress = state.service.add_xp(&user, req.delta)?;
    Ok(ok(view(&state, progress)))
}

pub async fn list_stories_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<CompletionRecord>> {
    let user = UserId::new(user_id)?;
    Ok(ok(state.service.list_completions(&user)?))
}

pub async fn record_story_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<RecordStoryRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let user = UserId::new(user_id)?;
    let Json(req) = body?;
    let unit = UnitKey::new(req.story_type)?;
    let outcome = state
        .service
        .record_completion(&user, &unit, req.current_scene)?;
    if outcome.created {
        Ok(ok(json!(outcome.record)))
    } else {
        Ok(ok_with_message(
            json!({ "alreadyCompleted": true, "record": outcome.record }),
            "Already completed",
        ))
    }
}

pub async fn list_badges_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<BadgeRecord>> {
    let user = UserId::new(user_id)?;
    Ok(ok(state.service.list_badges(&user)?))
}

pub async fn award_badge_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<AwardBadgeRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let user = UserId::new(user_id)?;
    let Json(req) = body?;
    let badge = BadgeKey::new(req.badge_key)?;
    let award = state
        .service
        .award_badge(&user, &badge, &req.badge_name, req.xp_awarded)?;
    if award.awarded {
        Ok(ok(json!({ "badge": award.badge, "progress": award.progress })))
    } else {
        Ok(ok_with_message(
            json!({ "alreadyAwarded": true, "badge": award.badge, "progress": award.progress }),
            "Badge already earned",
        ))
    }
}

pub async fn unlocks_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Vec<UnitUnlock>> {
    let user = UserId::new(user_id)?;
    Ok(ok(state.service.unlock_status(&user)?))
}

pub async fn submit_quiz_handler(
    State(state): State<AppState>,
    Path((user_id, unit_key)): Path<(String, String)>,
    body: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> ApiResult<UnitOutcome> {
    let user = UserId::new(user_id)?;
    let unit = UnitKey::new(unit_key)?;
    let Json(req) = body?;
    let outcome = state
        .service
        .submit_quiz(&user, &unit, req.correct, req.total)?;
    Ok(unit_response(outcome))
}

/// The body is optional: an empty body means "no scene". A body that is
/// present must be a valid request.
pub async fn complete_story_handler(
    State(state): State<AppState>,
    Path((user_id, unit_key)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<UnitOutcome> {
    let user = UserId::new(user_id)?;
    let unit = UnitKey::new(unit_key)?;
    let req: CompleteStoryRequest = if body.iter().all(u8::is_ascii_whitespace) {
        CompleteStoryRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ServerError::BadRequest(format!("invalid request body: {e}")))?
    };
    let outcome = state
        .service
        .complete_story(&user, &unit, req.current_scene)?;
    Ok(unit_response(outcome))
}

fn unit_response(outcome: UnitOutcome) -> Json<ApiResponse<UnitOutcome>> {
    if outcome.already_completed {
        ok_with_message(outcome, "Already completed")
    } else {
        ok(outcome)
    }
}

/// `limit` is parsed leniently: anything that is not a non-negative
/// integer falls back to the default.
pub async fn leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Vec<LeaderboardEntry>> {
    let limit = query
        .limit
        .as_deref()
        .and_then(|raw| raw.trim().parse::<usize>().ok());
    Ok(ok(state.service.leaderboard(limit)?))
}
