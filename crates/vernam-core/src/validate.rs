//! Operand validation and the encrypt-side content policy.
//!
//! Every check here runs before the engine is invoked:
//!
//! - Key length: a key shorter than the payload is fatal for the session;
//!   a longer key is silently truncated to the payload length (never the
//!   reverse).
//! - Content policy (encrypt direction only): a payload containing any
//!   configured disallowed character is refused. The refusal is encoded as
//!   an empty result message on the wire, not an error signal.
//! - Symbol validation: operand bytes outside the 27-symbol alphabet are
//!   fatal for the session.

use std::borrow::Cow;

use vernam_proto::{Message, Role};

use crate::error::SessionError;

/// Characters the encrypt service refuses to transform, as shipped by
/// default. Deployments can supply their own set via
/// [`ContentPolicy::new`].
pub const DEFAULT_DISALLOWED: &[u8] = b"$*!(#*djs8301these-are-all-bad-characters";

/// Disallowed-character set applied to encrypt payloads.
#[derive(Debug, Clone)]
pub struct ContentPolicy {
    disallowed: Cow<'static, [u8]>,
}

impl Default for ContentPolicy {
    fn default() -> Self {
        Self { disallowed: Cow::Borrowed(DEFAULT_DISALLOWED) }
    }
}

impl ContentPolicy {
    /// Policy refusing payloads containing any byte of `disallowed`.
    pub fn new(disallowed: impl Into<Cow<'static, [u8]>>) -> Self {
        Self { disallowed: disallowed.into() }
    }

    /// `true` if `payload` contains a disallowed byte.
    pub fn refuses(&self, payload: &[u8]) -> bool {
        payload.iter().any(|byte| self.disallowed.contains(byte))
    }
}

/// Outcome of validating one session's operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operands {
    /// Both operands parsed and equalized in length; ready for the engine.
    Ready {
        /// The payload to transform.
        payload: Message,
        /// Key material, truncated to the payload length.
        key: Message,
    },

    /// The encrypt payload hit the content policy; the session replies
    /// with an empty result instead of transforming.
    Refused,
}

/// Validate raw payload and key bytes for `role`.
///
/// Check order matters: the key-length contract is checked on the raw
/// bytes first, then the content policy (encrypt only), then symbol
/// parsing. A refused payload therefore still requires sufficient key
/// material, but is never symbol-validated.
pub fn prepare(
    payload: &[u8],
    key: &[u8],
    role: Role,
    policy: &ContentPolicy,
) -> Result<Operands, SessionError> {
    if key.len() < payload.len() {
        return Err(SessionError::KeyTooShort {
            key_len: key.len(),
            payload_len: payload.len(),
        });
    }

    if role == Role::Encrypt && policy.refuses(payload) {
        return Ok(Operands::Refused);
    }

    let key = Message::parse(&key[..payload.len()])?;
    let payload = Message::parse(payload)?;

    Ok(Operands::Ready { payload, key })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_pass_through() {
        let operands = prepare(b"HELLO", b"WORLD", Role::Decrypt, &ContentPolicy::default());
        match operands.unwrap() {
            Operands::Ready { payload, key } => {
                assert_eq!(payload.to_string(), "HELLO");
                assert_eq!(key.to_string(), "WORLD");
            },
            Operands::Refused => panic!("must not refuse"),
        }
    }

    #[test]
    fn excess_key_is_truncated() {
        let operands =
            prepare(b"HI", b"LONG KEY MATERIAL", Role::Encrypt, &ContentPolicy::default());
        match operands.unwrap() {
            Operands::Ready { key, .. } => assert_eq!(key.to_string(), "LO"),
            Operands::Refused => panic!("must not refuse"),
        }
    }

    #[test]
    fn short_key_is_fatal() {
        let err = prepare(b"HELLO", b"HI", Role::Encrypt, &ContentPolicy::default()).unwrap_err();
        assert_eq!(err, SessionError::KeyTooShort { key_len: 2, payload_len: 5 });
    }

    #[test]
    fn disallowed_payload_refused_for_encrypt() {
        let operands = prepare(b"BAD$DATA", b"KEYKEYKEY", Role::Encrypt, &ContentPolicy::default());
        assert_eq!(operands.unwrap(), Operands::Refused);
    }

    #[test]
    fn disallowed_bytes_pass_policy_for_decrypt_but_fail_parsing() {
        let err =
            prepare(b"BAD$DATA", b"KEYKEYKEY", Role::Decrypt, &ContentPolicy::default())
                .unwrap_err();
        assert!(matches!(err, SessionError::Message(_)));
    }

    #[test]
    fn out_of_alphabet_byte_outside_policy_set_is_fatal() {
        // 'z' is not in the default disallowed set but is not a symbol.
        let err = prepare(b"AzB", b"KEY", Role::Encrypt, &ContentPolicy::default()).unwrap_err();
        assert!(matches!(err, SessionError::Message(_)));
    }

    #[test]
    fn custom_policy_applies() {
        let policy = ContentPolicy::new(&b"X"[..]);
        assert!(policy.refuses(b"AXB"));
        assert!(!policy.refuses(b"ABC"));
    }

    #[test]
    fn empty_payload_needs_no_key() {
        let operands = prepare(b"", b"", Role::Encrypt, &ContentPolicy::default());
        match operands.unwrap() {
            Operands::Ready { payload, key } => {
                assert!(payload.is_empty());
                assert!(key.is_empty());
            },
            Operands::Refused => panic!("must not refuse"),
        }
    }
}
