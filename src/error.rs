use std::path::PathBuf;

use thiserror::Error;

/// Fatal problems found while resolving configuration, before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Discord webhook URL not configured. Set DISCORD_WEBHOOK_URL or add webhook_url to the config file")]
    MissingWebhookUrl,
    #[error("unsupported calendar type {0:?} (expected \"gregorian\" or \"julian\")")]
    InvalidCalendarType(String),
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to obtain a calendar record. Terminal for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("calendar request failed: {0}")]
    Request(String),
    #[error("failed to read calendar response body: {0}")]
    Body(String),
    #[error("failed to parse calendar JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("calendar API returned an empty record")]
    EmptyRecord,
}

/// A single webhook delivery attempt failed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request failed: {0}")]
    Request(String),
}

/// Date/title formatting problem; the formatter swaps in a fallback title.
#[derive(Debug, Error)]
pub enum TitleError {
    #[error("invalid {part} value {value}")]
    InvalidPart { part: &'static str, value: String },
    #[error("no such date {year}-{month}-{day}")]
    InvalidDate { year: i64, month: i64, day: i64 },
    #[error("first title is not a string: {0}")]
    NonStringTitle(String),
}
