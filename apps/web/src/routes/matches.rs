//! JSON API through which the external matcher hands over scored batches.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::matches::ranking::rank_matches;
use crate::models::JobMatch;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub received: usize,
    pub stored: usize,
}

/// GET /api/v1/matches
pub async fn handle_list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    state
        .store
        .load()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No job matches have been stored yet".to_string()))
}

/// POST /api/v1/matches
///
/// Ranks the incoming batch by score, keeps the top MATCH_LIMIT and replaces
/// whatever was stored before.
pub async fn handle_ingest_matches(
    State(state): State<AppState>,
    Json(matches): Json<Vec<JobMatch>>,
) -> Result<Json<IngestResponse>, AppError> {
    if matches.is_empty() {
        return Err(AppError::Validation(
            "At least one job match is required".to_string(),
        ));
    }

    let received = matches.len();
    let ranked = rank_matches(matches, state.config.match_limit);
    state.store.save(&ranked).await?;

    info!("Ingested {received} job matches, stored top {}", ranked.len());
    Ok(Json(IngestResponse {
        received,
        stored: ranked.len(),
    }))
}
