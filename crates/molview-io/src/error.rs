//! Error types for structure I/O and remote fetch

use thiserror::Error;

/// Errors that can occur while resolving formats or fetching structures
#[derive(Error, Debug)]
pub enum FetchError {
    /// Identifier does not have the shape the remote repository accepts
    #[error("invalid id '{0}'")]
    InvalidId(String),

    /// Format name not usable for this operation
    #[error("unsupported format '{0}' (use 'pdb', 'mmcif', or 'sdf')")]
    InvalidFormat(String),

    /// The remote repository has no entry for this identifier (HTTP 404)
    ///
    /// Distinguished from [`FetchError::Http`] so callers can branch on
    /// "try another id" versus "retry or report".
    #[error("id '{id}' not found in {database}")]
    NotFound {
        /// The normalized identifier that was requested
        id: String,
        /// Human-readable name of the remote repository
        database: &'static str,
    },

    /// Non-404 HTTP failure
    #[error("HTTP error {status}: {url}")]
    Http {
        /// HTTP status code
        status: u16,
        /// URL that failed
        url: String,
    },

    /// Transport-level failure (connection, TLS, body read)
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Create an invalid-id error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        FetchError::InvalidId(id.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network(message.into())
    }
}

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;
