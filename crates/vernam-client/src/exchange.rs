//! Async driver for one full exchange.

use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::TcpStream,
};
use vernam_core::framing::{read_message, write_frame};
use vernam_proto::Role;

use crate::{
    error::ClientError,
    session::{ClientAction, ClientSession},
};

/// Connect to the service at `host:port`.
///
/// Name resolution failures and refused connections both come back as a
/// [`ClientError::Connect`] carrying the address that failed.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, ClientError> {
    let addr = format!("{host}:{port}");
    TcpStream::connect(&addr)
        .await
        .map_err(|source| ClientError::Connect { addr, source })
}

/// Run one full exchange over `stream` and return the result bytes.
///
/// Generic over the stream so the same driver runs over production TCP
/// and turmoil simulation. One connection carries exactly one exchange.
pub async fn run_exchange<S>(
    stream: &mut S,
    role: Role,
    payload: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, ClientError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (mut session, mut actions) =
        ClientSession::start(role, payload.to_vec(), key.to_vec())?;

    loop {
        for action in actions {
            match action {
                ClientAction::Send(frame) => write_frame(stream, &frame).await?,
                ClientAction::Deliver(result) => return Ok(result),
            }
        }

        let message = read_message(stream).await?;
        actions = session.on_message(&message)?;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vernam_core::framing::write_message;

    use super::*;

    /// Scripted peer: a duplex stream with a hand-rolled server side.
    #[tokio::test]
    async fn exchange_against_scripted_server() {
        let (mut client_side, mut server_side) = tokio::io::duplex(1024);

        let server = tokio::spawn(async move {
            assert_eq!(read_message(&mut server_side).await.unwrap(), b"ENC_CLIENT");
            write_message(&mut server_side, b"ENC_SERVER").await.unwrap();
            assert_eq!(read_message(&mut server_side).await.unwrap(), b"HELLO");
            assert_eq!(read_message(&mut server_side).await.unwrap(), b"WORLD");
            write_message(&mut server_side, b"CSBWR").await.unwrap();
        });

        let result = run_exchange(&mut client_side, Role::Encrypt, b"HELLO", b"WORLD")
            .await
            .unwrap();
        assert_eq!(result, b"CSBWR");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn wrong_ack_aborts_without_sending_operands() {
        let (mut client_side, mut server_side) = tokio::io::duplex(1024);

        let server = tokio::spawn(async move {
            assert_eq!(read_message(&mut server_side).await.unwrap(), b"DEC_CLIENT");
            // Answer with the wrong pairing's greeting.
            write_message(&mut server_side, b"ENC_SERVER").await.unwrap();
            // The client must hang up instead of sending its payload.
            assert!(read_message(&mut server_side).await.is_err());
        });

        let err = run_exchange(&mut client_side, Role::Decrypt, b"CSBWR", b"WORLD")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Session(_)));

        drop(client_side);
        server.await.unwrap();
    }
}
