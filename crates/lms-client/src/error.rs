//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the LMS backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, timeout, TLS, undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Backend-supplied message, or a generic fallback.
        message: String,
    },

    /// The client could not be built from configuration.
    #[error(transparent)]
    Config(#[from] lms_config::ConfigError),
}

impl ClientError {
    /// Whether the request never got a backend verdict.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Message suitable for a single user-facing notification: the backend
    /// message for rejections, the transport message otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
