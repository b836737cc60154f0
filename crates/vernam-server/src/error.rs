//! Server error types.

use std::time::Duration;

use thiserror::Error;
use vernam_core::{SessionError, WireError};

/// Errors that can occur in the server.
///
/// Everything except a bind failure is fatal to one session only; the
/// acceptor loop and sibling sessions keep running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Socket-level failure (bind, accept, shutdown).
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Framed message read/write failure.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Protocol violation or validation failure within a session.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// No message arrived within the per-session read timeout.
    #[error("session idle for more than {timeout:?}")]
    Timeout {
        /// The configured limit.
        timeout: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_names_the_limit() {
        let err = ServerError::Timeout { timeout: Duration::from_secs(30) };
        assert_eq!(err.to_string(), "session idle for more than 30s");
    }

    #[test]
    fn session_errors_convert() {
        let err: ServerError = SessionError::Closed.into();
        assert!(matches!(err, ServerError::Session(_)));
    }
}
