//! Error types for asset generation

use std::time::Duration;
use thiserror::Error;

/// The main error type for storefront operations
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("API request failed with status {status}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Content blocked: {0}")]
    ContentBlocked(String),

    #[error("Failed to decode image data: {0}")]
    Decode(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Unknown asset '{id}'. Available: {available}")]
    UnknownAsset { id: String, available: String },

    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl StorefrontError {
    /// True when the failure came back from the remote service rather than
    /// from local I/O or configuration.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Api { .. }
                | Self::UnexpectedResponse(_)
                | Self::ContentBlocked(_)
                | Self::Decode(_)
                | Self::Timeout(_)
                | Self::Http(_)
        )
    }
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;
