//! Style payload decoding errors.

/// Error decoding a styled-span JSON payload.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Payload is not valid JSON or does not fit the style container shape.
    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
}
