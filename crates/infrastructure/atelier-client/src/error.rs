use reqwest::StatusCode;
use thiserror::Error;

/// Anything that keeps a generation round-trip from producing its payload.
/// The UI collapses all variants into one generic retry-suggesting notice;
/// the variants exist for logs and tests.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Endpoint returned status {0}")]
    Status(StatusCode),

    #[error("Malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Response is missing the `{0}` field")]
    MissingField(&'static str),
}
