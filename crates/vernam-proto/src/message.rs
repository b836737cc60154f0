//! Bounded symbol sequences exchanged as one logical unit.

use std::fmt;

use thiserror::Error;

use crate::alphabet::Symbol;

/// Upper bound on message length in symbols, matching the wire buffer
/// budget. Frames declaring more than this are rejected before allocation.
pub const MAX_MESSAGE_LEN: usize = 69_999;

/// Errors from parsing raw bytes into a [`Message`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// A byte outside the 27-symbol alphabet.
    #[error("invalid symbol {byte:#04x} at position {position}")]
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Zero-based position within the message.
        position: usize,
    },

    /// Message longer than [`MAX_MESSAGE_LEN`].
    #[error("message length {len} exceeds maximum {max}")]
    TooLong {
        /// Length that was requested.
        len: usize,
        /// The enforced maximum.
        max: usize,
    },
}

/// An ordered sequence of [`Symbol`]s with an explicit length.
///
/// There is no embedded terminator; the frame header carries the length.
/// The length bound is enforced at the wire boundary ([`Message::parse`]);
/// in-memory construction via `FromIterator` trusts the caller, whose
/// output length is always bounded by an already-parsed input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message(Vec<Symbol>);

impl Message {
    /// Parse raw wire bytes into a message.
    ///
    /// Fails on the first byte outside the alphabet or if the input is
    /// longer than [`MAX_MESSAGE_LEN`].
    pub fn parse(bytes: &[u8]) -> Result<Self, MessageError> {
        if bytes.len() > MAX_MESSAGE_LEN {
            return Err(MessageError::TooLong { len: bytes.len(), max: MAX_MESSAGE_LEN });
        }

        bytes
            .iter()
            .enumerate()
            .map(|(position, &byte)| {
                Symbol::from_char(char::from(byte))
                    .ok_or(MessageError::InvalidSymbol { byte, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse a string slice; convenience wrapper over [`Message::parse`].
    pub fn parse_str(s: &str) -> Result<Self, MessageError> {
        Self::parse(s.as_bytes())
    }

    /// Number of symbols in the message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the message holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// The message truncated to at most `len` symbols.
    ///
    /// Used to cut excess key material down to the payload length; a
    /// `len` longer than the message leaves it unchanged.
    pub fn truncated(mut self, len: usize) -> Self {
        self.0.truncate(len);
        self
    }

    /// Printable wire bytes for this message.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.as_char() as u8).collect()
    }
}

impl FromIterator<Symbol> for Message {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}
