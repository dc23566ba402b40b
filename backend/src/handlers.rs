use axum::{
    extract::{rejection::JsonRejection, Request, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{Profile, ProfileInput, Recommendation};
use crate::services::recommend::build_recommendation;
use crate::SharedState;

pub const RECOMMENDATIONS_PER_REQUEST: usize = 1;

/// Paths the single-page-app fallback must never answer.
const RESERVED_PREFIXES: [&str; 4] = ["api", "recommend", "profiles", "static"];

pub fn is_reserved(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    RESERVED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

pub async fn recommend(
    State(state): State<SharedState>,
    payload: Result<Json<ProfileInput>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let Json(profile) = payload?;

    let recommendations = state
        .profiles
        .get(&profile, RECOMMENDATIONS_PER_REQUEST)
        .into_iter()
        .map(|matched| {
            debug!(
                matched = %matched.item.name,
                score = matched.score,
                "recommendation match"
            );
            build_recommendation(&profile, matched.item)
        })
        .collect::<Vec<_>>();

    Ok(Json(recommendations))
}

pub async fn list_profiles(State(state): State<SharedState>) -> Json<Vec<Profile>> {
    Json(state.profiles.profiles().cloned().collect())
}

/// Serves `index.html` for client-side routes.
pub async fn spa_index(
    State(state): State<SharedState>,
    request: Request,
) -> Result<Response, ApiError> {
    let path = request.uri().path().to_string();
    if is_reserved(&path) {
        return Err(ApiError::NotFound(format!("no route for {path}")));
    }

    let index = state.config.index_path();
    if !index.is_file() {
        warn!(path = %index.display(), "index.html not found");
        return Ok(Json(json!({ "error": "index.html not found" })).into_response());
    }

    let Ok(response) = ServeFile::new(index).oneshot(request).await;
    Ok(response.into_response())
}
