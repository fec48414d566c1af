//! Error type shared by every API call in the crate.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of an API call as observed by the caller.
///
/// `Status` carries the backend's `detail` message when the error body had
/// one, so login feedback ("No active account found…") can be rendered
/// without further decoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: connection refused, aborted request, CORS.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for an HTTP 401 answer.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(super::http::STATUS_UNAUTHORIZED)
    }
}
