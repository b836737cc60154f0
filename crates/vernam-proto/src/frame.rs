//! Length-prefixed framing for logical messages.
//!
//! Each logical message (greeting, payload, key, result) travels as a
//! 4-byte big-endian length followed by exactly that many raw bytes, so a
//! receiver reassembles one message across partial reads instead of
//! trusting that one read call yields one complete message. A declared
//! length above [`MAX_MESSAGE_LEN`] is rejected before any allocation.

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;
use zerocopy::{
    BigEndian, FromBytes, Immutable, IntoBytes, KnownLayout, U32, Unaligned,
};

use crate::message::MAX_MESSAGE_LEN;

/// Errors from frame encoding or header validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer bytes available than a full header.
    #[error("truncated frame header: {len} of {} bytes", FrameHeader::SIZE)]
    Truncated {
        /// Bytes available.
        len: usize,
    },

    /// Declared or actual length above the wire budget.
    #[error("frame length {len} exceeds maximum {max}")]
    TooLong {
        /// Length that was declared or requested.
        len: usize,
        /// The enforced maximum.
        max: usize,
    },
}

/// Wire header carrying the byte length of the message that follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(C)]
pub struct FrameHeader {
    len: U32<BigEndian>,
}

impl FrameHeader {
    /// Encoded size of the header in bytes.
    pub const SIZE: usize = 4;

    /// Header for a message of `len` bytes.
    pub fn new(len: u32) -> Self {
        Self { len: U32::new(len) }
    }

    /// Parse and validate a header from the first [`Self::SIZE`] bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self, FrameError> {
        let header_bytes =
            bytes.get(..Self::SIZE).ok_or(FrameError::Truncated { len: bytes.len() })?;
        let header = Self::read_from_bytes(header_bytes)
            .map_err(|_| FrameError::Truncated { len: bytes.len() })?;

        let len = header.payload_len();
        if len > MAX_MESSAGE_LEN {
            return Err(FrameError::TooLong { len, max: MAX_MESSAGE_LEN });
        }

        Ok(header)
    }

    /// Declared message length in bytes.
    pub fn payload_len(&self) -> usize {
        self.len.get() as usize
    }

    /// Raw header bytes for writing to the wire.
    pub fn to_wire(&self) -> [u8; Self::SIZE] {
        self.len.get().to_be_bytes()
    }
}

/// Encode one logical message as header followed by body.
pub fn encode_frame(body: &[u8]) -> Result<Bytes, FrameError> {
    let len = u32::try_from(body.len())
        .ok()
        .filter(|&len| len as usize <= MAX_MESSAGE_LEN)
        .ok_or(FrameError::TooLong { len: body.len(), max: MAX_MESSAGE_LEN })?;

    let mut buf = BytesMut::with_capacity(FrameHeader::SIZE + body.len());
    buf.put_slice(&FrameHeader::new(len).to_wire());
    buf.put_slice(body);
    Ok(buf.freeze())
}
