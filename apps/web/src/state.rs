use std::sync::Arc;

use crate::config::Config;
use crate::matches::store::MatchStore;
use crate::routes::Route;
use crate::views::PageChrome;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match store. Default: FileMatchStore at RESULTS_PATH.
    pub store: Arc<dyn MatchStore>,
}

impl AppState {
    /// Page links and assets for the views, index route resolved by name.
    pub fn chrome(&self) -> PageChrome<'_> {
        PageChrome {
            index_url: Route::Index.path(),
            icon_stylesheet_url: &self.config.icon_stylesheet_url,
        }
    }
}
