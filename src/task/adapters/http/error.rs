//! Error types for the REST task adapter.

use reqwest::{Method, StatusCode, Url};
use thiserror::Error;

/// Failures raised by [`super::HttpTaskRepository`].
///
/// Request-time variants reach callers wrapped in
/// [`crate::task::ports::TaskRepositoryError::Transport`].
#[derive(Debug, Error)]
pub enum HttpAdapterError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The configured base URL cannot be extended with a path.
    #[error("base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    /// The request could not be sent or no response was received.
    #[error("{method} {url} failed: {source}")]
    Request {
        /// Request method.
        method: Method,
        /// Request URL.
        url: Url,
        /// Client error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{method} {url} returned HTTP {status}")]
    UnexpectedStatus {
        /// Request method.
        method: Method,
        /// Request URL.
        url: Url,
        /// Response status.
        status: StatusCode,
    },

    /// The response body was not the expected JSON.
    #[error("{method} {url} returned an unreadable body: {source}")]
    Decode {
        /// Request method.
        method: Method,
        /// Request URL.
        url: Url,
        /// Decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The response carried no body where one was required.
    #[error("{method} {url} returned an empty body")]
    EmptyBody {
        /// Request method.
        method: Method,
        /// Request URL.
        url: Url,
    },
}

impl HttpAdapterError {
    /// Returns the HTTP status for [`Self::UnexpectedStatus`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
