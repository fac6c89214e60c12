//! HTML page handlers.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::index::{render_index, NO_RESULTS_NOTICE};
use crate::views::results::render_results;

/// Query value that asks the index page to show the "nothing stored" notice.
pub const NO_RESULTS_NOTICE_KEY: &str = "no-results";

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub notice: Option<String>,
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let notice = match query.notice.as_deref() {
        Some(NO_RESULTS_NOTICE_KEY) => Some(NO_RESULTS_NOTICE),
        _ => None,
    };

    let html = render_index(state.chrome(), Route::Results.path(), notice)?;
    Ok(Html(html))
}

/// GET /results
///
/// Renders the stored matches in stored order. Redirects to the index with a
/// notice when no batch has been stored yet.
pub async fn handle_results(State(state): State<AppState>) -> Result<Response, AppError> {
    let Some(matches) = state.store.load().await? else {
        warn!("No job matches stored; redirecting to index");
        let target = format!("{}?notice={NO_RESULTS_NOTICE_KEY}", Route::Index.path());
        return Ok(Redirect::to(&target).into_response());
    };

    info!("Rendering {} job matches", matches.len());
    let html = render_results(&matches, state.chrome())?;
    Ok(Html(html).into_response())
}
