//! Command implementations for the baseball-stats CLI

pub mod admin;
pub mod browse;
pub mod common;
pub mod sync;


use std::path::PathBuf;

use crate::{
    api::DEFAULT_API_URL, storage::SqliteStore, Result, API_URL_ENV_VAR, DB_PATH_ENV_VAR,
};

/// Store path from the `--db` flag, then `BASEBALL_STATS_DB`, then the cache
/// directory default.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => SqliteStore::default_path(),
    }
}

/// API base URL from the `--api-url` flag, then `BASEBALL_STATS_API_URL`,
/// then [`DEFAULT_API_URL`].
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
