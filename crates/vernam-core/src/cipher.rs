//! The substitution-cipher engine.
//!
//! A Vigenère-style additive cipher over Z/27: each payload symbol is
//! shifted by the key symbol at the same position. Encode and decode are
//! exact inverses for the same key, and the alphabet is closed under both,
//! so engine output is always a valid message.
//!
//! The engine is a pure function with no shared state; concurrent sessions
//! call it freely.

use vernam_proto::Message;

/// Which way the transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext: `out = (p + k) mod 27`.
    Encode,
    /// Ciphertext to plaintext: `out = (p - k + 27) mod 27`.
    Decode,
}

/// Transform `payload` under `key`.
///
/// Contract: both operands have equal length. Validation
/// ([`crate::validate::prepare`]) enforces this before any call; the
/// engine itself is total and iterates payload positions, so an empty
/// payload yields an empty output.
pub fn transform(payload: &Message, key: &Message, direction: Direction) -> Message {
    debug_assert_eq!(payload.len(), key.len(), "operand lengths must match");

    payload
        .symbols()
        .iter()
        .zip(key.symbols())
        .map(|(&p, &k)| match direction {
            Direction::Encode => p.shift(k),
            Direction::Decode => p.unshift(k),
        })
        .collect()
}
