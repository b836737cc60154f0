//! Server-side session state machine.
//!
//! One accepted connection is one session. The machine is pure: the driver
//! feeds one received logical message at a time and executes the returned
//! actions, so the identical code runs under the production acceptor and
//! the simulation harness.
//!
//! State flow per session:
//!
//! ```text
//! AwaitGreeting -> AwaitPayload -> AwaitKey -> Closed
//! ```
//!
//! The transform and the reply happen on the key event; ordering within a
//! session (greeting, payload, key, transform, reply) is strict. Any error
//! moves the machine to `Closed` and the driver tears the connection down
//! without a cipher result.

use bytes::Bytes;
use vernam_proto::{Role, encode_frame};

use crate::{
    cipher::{Direction, transform},
    error::SessionError,
    validate::{ContentPolicy, Operands, prepare},
};

/// Lifecycle of one server session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the fixed client greeting; nothing is trusted yet.
    AwaitGreeting,
    /// Greeting verified and acknowledged; waiting for the payload.
    AwaitPayload,
    /// Payload held; waiting for the key material.
    AwaitKey,
    /// Terminal. The machine refuses further events.
    Closed,
}

/// Actions for the driver to execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Write one already-framed logical message to the peer.
    Send(Bytes),
    /// Flush and close the connection; the session is complete.
    Close,
}

/// Server half of one cipher session.
///
/// Owned by exactly one connection task for its entire lifetime; nothing
/// is shared across sessions.
#[derive(Debug)]
pub struct ServerSession {
    role: Role,
    state: SessionState,
    policy: ContentPolicy,
    payload: Option<Vec<u8>>,
}

impl ServerSession {
    /// New session for a service of `role`.
    pub fn new(role: Role, policy: ContentPolicy) -> Self {
        Self { role, state: SessionState::AwaitGreeting, policy, payload: None }
    }

    /// The service role this session belongs to.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Feed one received logical message.
    ///
    /// # Errors
    ///
    /// Every error is fatal to this session only. The machine moves to
    /// `Closed` and the driver closes the connection without a result.
    pub fn on_message(&mut self, bytes: &[u8]) -> Result<Vec<SessionAction>, SessionError> {
        let result = match self.state {
            SessionState::AwaitGreeting => self.on_greeting(bytes),
            SessionState::AwaitPayload => self.on_payload(bytes),
            SessionState::AwaitKey => self.on_key(bytes),
            SessionState::Closed => Err(SessionError::Closed),
        };

        if result.is_err() {
            self.state = SessionState::Closed;
        }

        result
    }

    fn on_greeting(&mut self, bytes: &[u8]) -> Result<Vec<SessionAction>, SessionError> {
        let expected = self.role.client_greeting();
        if bytes != expected {
            return Err(SessionError::ProtocolViolation {
                expected: String::from_utf8_lossy(expected).into_owned(),
                got: String::from_utf8_lossy(bytes).into_owned(),
            });
        }

        tracing::debug!(role = %self.role, "handshake verified");
        self.state = SessionState::AwaitPayload;

        let ack = encode_frame(self.role.server_greeting())?;
        Ok(vec![SessionAction::Send(ack)])
    }

    fn on_payload(&mut self, bytes: &[u8]) -> Result<Vec<SessionAction>, SessionError> {
        // Raw bytes only; validation waits until the key arrives so the
        // key-length contract is checked first.
        self.payload = Some(bytes.to_vec());
        self.state = SessionState::AwaitKey;
        Ok(vec![])
    }

    fn on_key(&mut self, key: &[u8]) -> Result<Vec<SessionAction>, SessionError> {
        let payload = self.payload.take().ok_or(SessionError::Closed)?;
        self.state = SessionState::Closed;

        let reply = match prepare(&payload, key, self.role, &self.policy)? {
            Operands::Refused => {
                tracing::debug!(role = %self.role, "payload refused by content policy");
                encode_frame(b"")?
            },
            Operands::Ready { payload, key } => {
                let direction = match self.role {
                    Role::Encrypt => Direction::Encode,
                    Role::Decrypt => Direction::Decode,
                };
                let result = transform(&payload, &key, direction);
                tracing::debug!(role = %self.role, len = result.len(), "transform complete");
                encode_frame(&result.to_bytes())?
            },
        };

        Ok(vec![SessionAction::Send(reply), SessionAction::Close])
    }
}
