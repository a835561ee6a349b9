//! Request handlers for moodboard generation and listing.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::{
    ContentFormat, MoodBrief, MoodResponse, MoodboardRecord, MoodboardRequest, MoodboardResponse,
};

use super::error::ApiResult;
use super::state::AppState;

const DEFAULT_LIST_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub format: ContentFormat,
}

/// `?skip=&limit=` for listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// POST /generate-moodboard
// ---------------------------------------------------------------------------

pub async fn generate_moodboard(
    State(state): State<AppState>,
    Query(params): Query<GenerateParams>,
    Json(request): Json<MoodboardRequest>,
) -> ApiResult<Json<MoodboardResponse>> {
    let response = state.app.generate_moodboard(request, params.format).await?;
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// POST /generate-mood
// ---------------------------------------------------------------------------

pub async fn generate_mood(
    State(state): State<AppState>,
    Json(brief): Json<MoodBrief>,
) -> Json<MoodResponse> {
    Json(state.app.generate_mood(brief).await)
}

// ---------------------------------------------------------------------------
// GET /moodboards
// ---------------------------------------------------------------------------

pub async fn list_moodboards(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<MoodboardRecord>>> {
    let records = state
        .app
        .list_moodboards(params.skip, params.limit)
        .await?;
    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
