//! Error types for the baseball statistics library and CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid stat category: {category}")]
    InvalidCategory { category: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Team not found: {id}")]
    TeamNotFound { id: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Admin login required (run `baseball-stats admin login`)")]
    NotAuthenticated,
}

impl StatsError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        StatsError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Storage {
            message: format!("{err:#}"),
        }
    }
}

#[cfg(test)]
mod tests;
