//! Error types for moderation oracles.

use thiserror::Error;

/// Errors that can occur while obtaining a moderation verdict.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// The oracle is misconfigured (missing key, bad URL, etc.)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The oracle could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The oracle responded, but the verdict could not be produced.
    #[error("review failed: {0}")]
    ReviewFailed(String),

    /// The oracle did not answer in time.
    #[error("review timed out")]
    Timeout,
}
