//! Error types for the odds feed client.

use thiserror::Error;

/// Errors that can occur when talking to The Odds API.
#[derive(Debug, Error)]
pub enum OddsError {
    /// Missing API key.
    #[error("ODDS_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error.
    #[error("Odds API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Free tier allows 500 requests/month.")]
    RateLimitExceeded,

    /// No events available.
    #[error("No events available for {0}")]
    NoData(String),

    /// Environment variable error.
    #[error("Environment error: {0}")]
    Env(#[from] dotenvy::Error),
}
