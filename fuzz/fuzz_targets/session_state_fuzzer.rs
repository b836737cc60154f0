//! Fuzz target for the server session state machine
//!
//! Drives a session with arbitrary message sequences and checks the state
//! invariants hold regardless of input.
//!
//! # Strategy
//!
//! - Arbitrary byte messages: malformed greetings, junk payloads, junk keys
//! - Shaped messages: valid greetings and alphabet payloads mixed in, so
//!   the fuzzer reaches the deeper states
//! - Both roles, arbitrary content policy bytes
//!
//! # Invariants
//!
//! - NEVER panic on any input
//! - `Closed` is terminal: every event in `Closed` errors, no actions
//! - Any error transitions the session to `Closed`
//! - A completed exchange emits exactly a `Send` then a `Close`
//! - A successful result is never longer than the payload that produced it

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vernam_core::{ContentPolicy, ServerSession, SessionAction, SessionState};
use vernam_proto::{FrameHeader, Role};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedMessage {
    /// Raw bytes, exercises greeting and symbol validation.
    Raw(Vec<u8>),
    /// The correct greeting for the session's role.
    ValidGreeting,
    /// The opposite pairing's greeting.
    CrossGreeting,
    /// Bytes folded into the message alphabet, reaches the cipher.
    Alphabet(Vec<u8>),
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    encrypt: bool,
    default_policy: bool,
    policy_bytes: Vec<u8>,
    messages: Vec<FuzzedMessage>,
}

fn fold_to_alphabet(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .map(|b| match b % 27 {
            26 => b' ',
            i => b'A' + i,
        })
        .collect()
}

fuzz_target!(|input: FuzzInput| {
    let role = if input.encrypt { Role::Encrypt } else { Role::Decrypt };
    let policy = if input.default_policy {
        ContentPolicy::default()
    } else {
        ContentPolicy::new(input.policy_bytes.clone())
    };

    let mut session = ServerSession::new(role, policy);
    let mut payload_len = None;

    for message in &input.messages {
        let bytes = match message {
            FuzzedMessage::Raw(bytes) => bytes.clone(),
            FuzzedMessage::ValidGreeting => role.client_greeting().to_vec(),
            FuzzedMessage::CrossGreeting => role.opposite().client_greeting().to_vec(),
            FuzzedMessage::Alphabet(bytes) => fold_to_alphabet(bytes),
        };

        if session.state() == SessionState::AwaitPayload {
            payload_len = Some(bytes.len());
        }

        match session.on_message(&bytes) {
            Ok(actions) => {
                let mut iter = actions.iter();
                match (iter.next(), iter.next(), iter.next()) {
                    // Greeting ack, or operand accepted silently.
                    (None, ..) | (Some(SessionAction::Send(_)), None, _) => {}
                    // Completed exchange: result then hang up.
                    (Some(SessionAction::Send(result)), Some(SessionAction::Close), None) => {
                        let body_len = result.len() - FrameHeader::SIZE;
                        if let Some(len) = payload_len {
                            assert!(body_len <= len, "result longer than payload");
                        }
                        assert_eq!(session.state(), SessionState::Closed);
                    }
                    _ => panic!("unexpected action sequence: {actions:?}"),
                }
            }
            Err(_) => {
                assert_eq!(session.state(), SessionState::Closed, "error must close");
            }
        }

        if session.state() == SessionState::Closed {
            // Terminal: further input must error without acting.
            let result = session.on_message(b"ENC_CLIENT");
            assert!(result.is_err(), "closed session accepted input");
            break;
        }
    }
});
