//! Error types for the Sleeper recap CLI
//!
//! Only the I/O collaborators (HTTP, cache files, config files) produce errors.
//! The payload pipeline itself is total and degrades to sentinel values instead.

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, RecapError>;

#[derive(Error, Debug)]
pub enum RecapError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Sleeper API returned no data for {endpoint}")]
    NoData { endpoint: String },

    #[error("Invalid week: {week}")]
    InvalidWeek { week: u16 },
}

impl RecapError {
    pub fn config(message: impl Into<String>) -> Self {
        RecapError::Config {
            message: message.into(),
        }
    }
}
