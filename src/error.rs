use reqwest::StatusCode;
use thiserror::Error;

pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded. Please try again later.";
pub const NOT_FOUND_MESSAGE: &str = "User not found";

/// Failures of a single GitHub API request. None of them are retried; the
/// user has to search again.
///
/// The `Display` text is what ends up on screen.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 403 on the profile lookup.
    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,

    /// Any other non-success status on the profile lookup.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound(StatusCode),

    /// Non-success status on the repository list.
    #[error("Failed to load repositories ({0})")]
    Status(StatusCode),

    /// Connection, TLS or body decoding failure, surfaced as-is.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

/// Failures while reading or writing the preference file.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Could not find a config directory for preferences")]
    NoConfigDir,

    #[error("Preference file IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
