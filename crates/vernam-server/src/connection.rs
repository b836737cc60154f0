//! Per-connection session driver.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use vernam_core::{
    ContentPolicy, Environment, ServerSession, SessionAction, SessionState,
    framing::{read_message, write_frame},
};
use vernam_proto::Role;

use crate::error::ServerError;

/// Drive one session over `stream` until it completes or fails.
///
/// Generic over the stream so production TCP and turmoil simulation share
/// this exact driver. The session owns its connection for its entire
/// lifetime; errors are fatal to this session only and the caller just
/// logs them.
pub async fn serve_connection<S, E>(
    mut stream: S,
    session_id: u64,
    role: Role,
    policy: ContentPolicy,
    read_timeout: Duration,
    env: &E,
) -> Result<(), ServerError>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
    E: Environment,
{
    let started = env.now();
    let mut session = ServerSession::new(role, policy);

    while session.state() != SessionState::Closed {
        let message = read_with_timeout(&mut stream, read_timeout, env).await?;

        for action in session.on_message(&message)? {
            match action {
                SessionAction::Send(frame) => write_frame(&mut stream, &frame).await?,
                SessionAction::Close => {
                    // One request/response per connection.
                    stream.shutdown().await?;
                },
            }
        }
    }

    tracing::debug!(session_id, elapsed = ?(env.now() - started), "session complete");
    Ok(())
}

/// Read the next logical message, bounding how long an idle peer can hold
/// the session open.
async fn read_with_timeout<S, E>(
    stream: &mut S,
    timeout: Duration,
    env: &E,
) -> Result<Vec<u8>, ServerError>
where
    S: AsyncRead + Unpin + Send,
    E: Environment,
{
    tokio::select! {
        message = read_message(stream) => Ok(message?),
        () = env.sleep(timeout) => Err(ServerError::Timeout { timeout }),
    }
}
