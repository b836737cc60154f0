//! Session-level error types.

use thiserror::Error;
use vernam_proto::{FrameError, MessageError};

/// Errors fatal to a single session.
///
/// None of these cross the wire: the driver logs the error, closes the
/// connection without a cipher result, and sibling sessions continue
/// unaffected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The peer opened with the wrong greeting (or the greeting of the
    /// other pairing). No partial work is performed.
    #[error("protocol violation: expected greeting {expected:?}, got {got:?}")]
    ProtocolViolation {
        /// The greeting this service requires.
        expected: String,
        /// What the peer actually sent (lossy UTF-8).
        got: String,
    },

    /// Key material shorter than the payload; the transform never runs.
    #[error("key length {key_len} is shorter than payload length {payload_len}")]
    KeyTooShort {
        /// Symbols of key material received.
        key_len: usize,
        /// Symbols of payload received.
        payload_len: usize,
    },

    /// An operand failed symbol validation.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// A reply could not be framed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// An event arrived after the session reached its terminal state.
    #[error("session already closed")]
    Closed,
}
