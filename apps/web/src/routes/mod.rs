pub mod health;
pub mod matches;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Named application routes. Views link through `Route::path()` rather than
/// hard-coding paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Results,
    Health,
    MatchesApi,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Results => "/results",
            Route::Health => "/health",
            Route::MatchesApi => "/api/v1/matches",
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(Route::Health.path(), get(health::health_handler))
        // Pages
        .route(Route::Index.path(), get(pages::handle_index))
        .route(Route::Results.path(), get(pages::handle_results))
        // Matcher hand-off API
        .route(
            Route::MatchesApi.path(),
            get(matches::handle_list_matches).post(matches::handle_ingest_matches),
        )
        .with_state(state)
}
