//! Client error taxonomy and exit-code mapping.

use std::path::PathBuf;

use vernam_core::{SessionError, WireError};
use vernam_proto::MessageError;

/// Anything a client binary can fail with.
///
/// Local failures (bad operands, unreadable files) exit with code 1 before
/// the connection is opened; network and protocol failures exit with code 2.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A message or key file could not be read.
    #[error("cannot read {path}: {source}")]
    File {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The key is shorter than the message it must cover.
    #[error("key is too short: {key_len} bytes for a {payload_len} byte message")]
    KeyTooShort {
        /// Bytes of key material supplied.
        key_len: usize,
        /// Bytes of message to cover.
        payload_len: usize,
    },

    /// The plaintext contains bytes the encrypt service refuses to handle.
    #[error("message contains disallowed characters")]
    DisallowedContent,

    /// An operand is not a valid message.
    #[error(transparent)]
    InvalidInput(#[from] MessageError),

    /// The server could not be reached.
    #[error("cannot connect to {addr}: {source}")]
    Connect {
        /// The `host:port` that failed.
        addr: String,
        /// Underlying resolution or connection error.
        #[source]
        source: std::io::Error,
    },

    /// The connection failed mid-exchange.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The server violated the exchange protocol.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Writing the result to stdout failed.
    #[error("cannot write result: {0}")]
    Output(#[source] std::io::Error),
}

impl ClientError {
    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::File { .. }
            | Self::KeyTooShort { .. }
            | Self::DisallowedContent
            | Self::InvalidInput(_) => 1,
            Self::Connect { .. }
            | Self::Wire(_)
            | Self::Session(_)
            | Self::Output(_) => 2,
        }
    }
}
