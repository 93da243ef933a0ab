//! Error types for the Spotify Web API client.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Spotify Web API.
///
/// [`Api`](SpotifyError::Api) means the service answered and rejected the
/// request. Every other variant means the call could not complete or its
/// response could not be understood.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-2xx status with an error envelope:
    ///
    /// ```json
    /// { "error": { "status": 403, "message": "Insufficient client scope" } }
    /// ```
    ///
    /// Common statuses:
    /// - `401` — access token missing, invalid or expired
    /// - `403` — token lacks the required scope
    /// - `404` — unknown resource
    /// - `429` — rate limited
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message supplied by the service, unmodified.
        message: String,
    },

    /// Non-2xx status whose body is not a service error envelope.
    #[error("HTTP {status} with no service error body")]
    Status { status: u16 },

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response decoded but breaks the endpoint's contract
    /// (e.g. wrong number of booleans for a follow check).
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// A request argument was rejected before anything was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No access token is configured. Call `login` first or set
    /// `SPOTIFY_ACCESS_TOKEN`.
    #[error("not logged in")]
    NotLoggedIn,

    /// File I/O error (session read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl SpotifyError {
    /// HTTP status of the failed response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Status { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` when the service explicitly rejected the request.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Convenience alias for `Result<T, SpotifyError>`.
pub type Result<T> = std::result::Result<T, SpotifyError>;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Deserialize)]
struct ErrorObject {
    message: String,
}

/// Translate a non-2xx response into an error.
///
/// The reported status is always the HTTP one; the `status` echoed inside the
/// envelope is ignored.
pub(crate) fn from_response(status: u16, body: &[u8]) -> SpotifyError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => SpotifyError::Api {
            status,
            message: envelope.error.message,
        },
        Err(_) => SpotifyError::Status { status },
    }
}
