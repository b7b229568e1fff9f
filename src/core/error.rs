use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FxError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Every configured rate source failed.
    #[error("all rate sources are unavailable ({} attempted)", attempts.len())]
    AllSourcesFailed {
        /// One entry per source, in the order they were tried.
        attempts: Vec<SourceFailure>,
    },

    /// A required configuration value was not supplied.
    #[error("missing required configuration value: {0}")]
    MissingConfig(&'static str),
}

/// A single failed attempt against one rate source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    /// The URL that was requested.
    pub url: String,
    /// Rendered error for that attempt.
    pub reason: String,
}
