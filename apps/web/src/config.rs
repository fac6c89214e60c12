use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_RESULTS_PATH: &str = "output/top_5_matched_jobs.json";
const DEFAULT_ICON_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Which `MatchStore` backend the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub results_path: PathBuf,
    /// Number of top-ranked matches kept when a new batch is ingested.
    pub match_limit: usize,
    pub store_backend: StoreBackend,
    pub icon_stylesheet_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let match_limit = lookup("MATCH_LIMIT")
            .unwrap_or_else(|| "5".to_string())
            .parse::<usize>()
            .context("MATCH_LIMIT must be a positive integer")?;
        if match_limit == 0 {
            bail!("MATCH_LIMIT must be at least 1");
        }

        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("file") => StoreBackend::File,
            Some("memory") => StoreBackend::Memory,
            Some(other) => bail!("STORE_BACKEND must be 'file' or 'memory', got '{other}'"),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            results_path: lookup("RESULTS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_PATH)),
            match_limit,
            store_backend,
            icon_stylesheet_url: lookup("ICON_STYLESHEET_URL")
                .unwrap_or_else(|| DEFAULT_ICON_STYLESHEET_URL.to_string()),
        })
    }
}
