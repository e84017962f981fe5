//! Error types for registry operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested repository or tag does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// Repository, or `repository:tag`, that was requested.
        resource: String,
    },

    /// The registry answered successfully but the response is unusable.
    #[error("Bad response from registry: {message}")]
    BadResponse {
        /// Error message.
        message: String,
    },

    /// The registry answered with a non-success status other than 404.
    #[error("Registry error: {status} - {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the registry.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout {
        /// Request URL.
        url: String,
    },

    /// A response body could not be decoded into the expected shape.
    #[error("Failed to parse {context}: {source}")]
    Parse {
        /// What was being parsed.
        context: &'static str,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to connect to registry.
    #[error("Failed to connect to registry at {url}: {source}")]
    ConnectionFailed {
        /// Registry URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Invalid registry URL.
    #[error("Invalid registry URL: {url}")]
    InvalidUrl {
        /// URL string.
        url: String,
    },

    /// TLS material could not be loaded.
    #[error("TLS configuration error: {message}")]
    Tls {
        /// Error message.
        message: String,
    },

    /// File I/O error.
    #[error("File I/O error at {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl RegistryError {
    /// Returns `true` if the registry reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map_or_else(|| "unknown".to_string(), ToString::to_string);

        if err.is_timeout() {
            Self::Timeout { url }
        } else if err.is_connect() {
            Self::ConnectionFailed { url, source: err }
        } else if let Some(status) = err.status() {
            Self::ServerError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::BadResponse {
                message: err.to_string(),
            }
        }
    }
}
