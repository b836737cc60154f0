//! Async read/write of length-prefixed logical messages.
//!
//! Generic over `AsyncRead`/`AsyncWrite` so the same code paths run on
//! tokio TCP streams in production and turmoil streams in simulation.
//! `read_exact` reassembles a message across partial reads; the declared
//! length is validated against the wire budget before the body is
//! allocated.

use bytes::Bytes;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use vernam_proto::{FrameError, FrameHeader, encode_frame};

/// Errors moving framed messages across a transport.
#[derive(Debug, Error)]
pub enum WireError {
    /// Transport read/write failure (including EOF mid-message).
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or oversized frame.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

/// Read one logical message, blocking until it is complete.
pub async fn read_message<R>(reader: &mut R) -> Result<Vec<u8>, WireError>
where
    R: AsyncRead + Unpin,
{
    let mut header_buf = [0u8; FrameHeader::SIZE];
    reader.read_exact(&mut header_buf).await?;
    let header = FrameHeader::parse(&header_buf)?;

    let mut body = vec![0u8; header.payload_len()];
    reader.read_exact(&mut body).await?;
    Ok(body)
}

/// Frame and write one logical message.
pub async fn write_message<W>(writer: &mut W, body: &[u8]) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
{
    write_frame(writer, &encode_frame(body)?).await
}

/// Write an already-encoded frame (e.g. from a session action).
pub async fn write_frame<W>(writer: &mut W, frame: &Bytes) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(frame).await?;
    writer.flush().await?;
    Ok(())
}
