//! Client-side session state machine.
//!
//! Mirror of the server machine: send greeting, require the exact matching
//! acknowledgment, then payload, then key, then await the single result.
//! A wrong acknowledgment aborts before any payload or key bytes are sent.

use bytes::Bytes;
use vernam_core::SessionError;
use vernam_proto::{Role, encode_frame};

/// Lifecycle of one client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// Greeting sent; waiting for the server's acknowledgment.
    AwaitAck,
    /// Payload and key sent; waiting for the result message.
    AwaitResult,
    /// Terminal. The machine refuses further events.
    Closed,
}

/// Actions for the driver to execute, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientAction {
    /// Write one already-framed logical message to the server.
    Send(Bytes),
    /// The result message arrived; the exchange is complete.
    Deliver(Vec<u8>),
}

/// Client half of one cipher session.
#[derive(Debug)]
pub struct ClientSession {
    role: Role,
    state: ClientState,
    payload: Vec<u8>,
    key: Vec<u8>,
}

impl ClientSession {
    /// Start a session: returns the machine and the opening actions
    /// (sending the greeting).
    ///
    /// Operands are raw bytes; local validation belongs to the caller
    /// (see [`crate::check_operands`]) and must happen before this.
    pub fn start(
        role: Role,
        payload: Vec<u8>,
        key: Vec<u8>,
    ) -> Result<(Self, Vec<ClientAction>), SessionError> {
        let greeting = encode_frame(role.client_greeting())?;
        let session = Self { role, state: ClientState::AwaitAck, payload, key };
        Ok((session, vec![ClientAction::Send(greeting)]))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ClientState {
        self.state
    }

    /// Feed one received logical message.
    ///
    /// # Errors
    ///
    /// A wrong acknowledgment is a protocol violation: the connection
    /// must be aborted without sending payload or key.
    pub fn on_message(&mut self, bytes: &[u8]) -> Result<Vec<ClientAction>, SessionError> {
        let result = match self.state {
            ClientState::AwaitAck => self.on_ack(bytes),
            ClientState::AwaitResult => self.on_result(bytes),
            ClientState::Closed => Err(SessionError::Closed),
        };

        if result.is_err() {
            self.state = ClientState::Closed;
        }

        result
    }

    fn on_ack(&mut self, bytes: &[u8]) -> Result<Vec<ClientAction>, SessionError> {
        let expected = self.role.server_greeting();
        if bytes != expected {
            return Err(SessionError::ProtocolViolation {
                expected: String::from_utf8_lossy(expected).into_owned(),
                got: String::from_utf8_lossy(bytes).into_owned(),
            });
        }

        tracing::debug!(role = %self.role, "server acknowledged handshake");
        self.state = ClientState::AwaitResult;

        let payload = encode_frame(&self.payload)?;
        let key = encode_frame(&self.key)?;
        Ok(vec![ClientAction::Send(payload), ClientAction::Send(key)])
    }

    fn on_result(&mut self, bytes: &[u8]) -> Result<Vec<ClientAction>, SessionError> {
        self.state = ClientState::Closed;

        if bytes.is_empty() && !self.payload.is_empty() {
            // Could be a content-policy refusal; indistinguishable on the
            // wire from an encrypted empty input.
            tracing::warn!(role = %self.role, "server returned an empty result");
        }

        Ok(vec![ClientAction::Deliver(bytes.to_vec())])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use vernam_proto::FrameHeader;

    use super::*;

    fn sent_body(action: &ClientAction) -> &[u8] {
        match action {
            ClientAction::Send(frame) => &frame[FrameHeader::SIZE..],
            ClientAction::Deliver(_) => panic!("expected Send action"),
        }
    }

    #[test]
    fn full_exchange() {
        let (mut session, actions) =
            ClientSession::start(Role::Encrypt, b"HELLO".to_vec(), b"WORLD".to_vec()).unwrap();
        assert_eq!(sent_body(&actions[0]), b"ENC_CLIENT");
        assert_eq!(session.state(), ClientState::AwaitAck);

        let actions = session.on_message(b"ENC_SERVER").unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(sent_body(&actions[0]), b"HELLO");
        assert_eq!(sent_body(&actions[1]), b"WORLD");
        assert_eq!(session.state(), ClientState::AwaitResult);

        let actions = session.on_message(b"CSBWR").unwrap();
        assert_eq!(actions, vec![ClientAction::Deliver(b"CSBWR".to_vec())]);
        assert_eq!(session.state(), ClientState::Closed);
    }

    #[test]
    fn wrong_ack_aborts_before_payload() {
        let (mut session, _) =
            ClientSession::start(Role::Decrypt, b"CSBWR".to_vec(), b"WORLD".to_vec()).unwrap();

        let err = session.on_message(b"ENC_SERVER").unwrap_err();
        assert!(matches!(err, SessionError::ProtocolViolation { .. }));
        assert_eq!(session.state(), ClientState::Closed);
    }

    #[test]
    fn empty_result_is_delivered_as_empty() {
        let (mut session, _) =
            ClientSession::start(Role::Encrypt, b"BAD".to_vec(), b"KEY".to_vec()).unwrap();
        session.on_message(b"ENC_SERVER").unwrap();

        let actions = session.on_message(b"").unwrap();
        assert_eq!(actions, vec![ClientAction::Deliver(Vec::new())]);
    }

    #[test]
    fn closed_session_refuses_events() {
        let (mut session, _) =
            ClientSession::start(Role::Encrypt, b"A".to_vec(), b"B".to_vec()).unwrap();
        session.on_message(b"ENC_SERVER").unwrap();
        session.on_message(b"B").unwrap();

        assert_eq!(session.on_message(b"MORE").unwrap_err(), SessionError::Closed);
    }
}
