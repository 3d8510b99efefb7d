//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum Error {
    /// A facility required to produce the output was not compiled in
    #[error("{capability} is not available")]
    MissingCapability {
        /// What is missing, e.g. "PNG encoder"
        capability: String,
        /// Remediation shown to the user
        hint: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to encode a canvas
    #[error("Encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Filesystem error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Remediation hint, if this error carries one
    pub fn hint(&self) -> Option<&str> {
        match self {
            Error::MissingCapability { hint, .. } => Some(hint.as_str()),
            _ => None,
        }
    }
}
