//! Error types for the joke API client.
//!
//! # Design
//! Only failures the client cannot shape into a record are errors: the
//! request never completed, the body could not be read, or the body was not
//! the JSON we expected. An unknown joke id is NOT an error here; the service
//! answers with a status/message envelope which is returned as a normal
//! record. `RemoteError` is the opt-in typed view of such an envelope.

use thiserror::Error;

/// Errors returned by `DadJokes` operations and `JokeClient` parse methods.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection refused, DNS failure, timeout or any other failure inside
    /// the HTTP agent.
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response body could not be read.
    #[error("reading response body failed: {0}")]
    Io(#[from] std::io::Error),

    /// The body was not valid JSON, or a field had an unexpected JSON type.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// An application-level failure reported by the service inside an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("joke service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct RemoteError {
    pub status: u16,
    pub message: Option<String>,
}
