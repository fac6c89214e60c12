//! Match Store — where the latest batch of ranked matches lives between
//! ingest and display.
//!
//! Default: `FileMatchStore` (pretty-printed JSON document on disk).
//! `MemoryMatchStore` keeps the batch in-process for tests and throwaway runs.
//!
//! `AppState` holds an `Arc<dyn MatchStore>`, picked at startup via config.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::JobMatch;

/// Storage for the current batch of job matches.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Returns `None` when no batch has been stored yet.
    async fn load(&self) -> Result<Option<Vec<JobMatch>>, AppError>;

    /// Replaces the stored batch.
    async fn save(&self, matches: &[JobMatch]) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FileMatchStore
// ────────────────────────────────────────────────────────────────────────────

pub struct FileMatchStore {
    path: PathBuf,
}

impl FileMatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MatchStore for FileMatchStore {
    async fn load(&self) -> Result<Option<Vec<JobMatch>>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No stored matches at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to read {}", self.path.display()))
                    .into())
            }
        };

        let matches: Vec<JobMatch> = serde_json::from_slice(&bytes)?;
        log_loaded(&matches);
        Ok(Some(matches))
    }

    async fn save(&self, matches: &[JobMatch]) -> Result<(), AppError> {
        let body = serde_json::to_vec_pretty(matches)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &body))
            .await
            .context("Match persistence task failed")??;

        info!("Saved {} matches to {}", matches.len(), self.path.display());
        Ok(())
    }
}

/// Writes through a sibling temp file and renames it over `path`,
/// so readers see either the old document or the new one.
fn write_atomically(path: &Path, body: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryMatchStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryMatchStore {
    matches: RwLock<Option<Vec<JobMatch>>>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchStore for MemoryMatchStore {
    async fn load(&self) -> Result<Option<Vec<JobMatch>>, AppError> {
        let matches = self.matches.read().await.clone();
        if let Some(matches) = &matches {
            log_loaded(matches);
        }
        Ok(matches)
    }

    async fn save(&self, matches: &[JobMatch]) -> Result<(), AppError> {
        *self.matches.write().await = Some(matches.to_vec());
        info!("Saved {} matches in memory", matches.len());
        Ok(())
    }
}

fn log_loaded(matches: &[JobMatch]) {
    let without_details = matches.iter().filter(|m| m.match_details.is_none()).count();
    if without_details > 0 {
        warn!("{without_details} of {} stored matches have no match_details", matches.len());
    }
    debug!("Loaded {} stored matches", matches.len());
}
