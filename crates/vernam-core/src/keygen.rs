//! Uniform key generation over the cipher alphabet.

use vernam_proto::{ALPHABET_LEN, Message, Symbol};

use crate::env::Environment;

/// Rejection-sampling bound: 9 * 27 = 243 buckets. Bytes at or above this
/// are discarded so every symbol keeps exactly 9/243 probability; a plain
/// `byte % 27` over all 256 values would bias the low symbols.
const REJECTION_BOUND: u8 = 243;

/// Generate `len` symbols of key material, uniform over the 27-symbol
/// alphabet.
///
/// Randomness comes from the [`Environment`], so production keys draw from
/// the OS entropy pool while simulation keys are seeded and reproducible.
pub fn generate_key<E: Environment>(env: &E, len: usize) -> Message {
    let mut symbols = Vec::with_capacity(len);
    let mut buf = [0u8; 512];

    while symbols.len() < len {
        env.random_bytes(&mut buf);
        for &byte in &buf {
            if symbols.len() == len {
                break;
            }
            if byte < REJECTION_BOUND {
                if let Some(symbol) = Symbol::from_index(byte % ALPHABET_LEN) {
                    symbols.push(symbol);
                }
            }
        }
    }

    symbols.into_iter().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::{Duration, Instant};

    use vernam_proto::Message;

    use super::*;

    /// Deterministic counter-based environment for key tests.
    #[derive(Clone, Default)]
    struct CounterEnv;

    impl Environment for CounterEnv {
        fn now(&self) -> Instant {
            Instant::now()
        }

        fn sleep(&self, _duration: Duration) -> impl std::future::Future<Output = ()> + Send {
            std::future::ready(())
        }

        fn random_bytes(&self, buffer: &mut [u8]) {
            for (i, byte) in buffer.iter_mut().enumerate() {
                *byte = u8::try_from(i % 256).unwrap_or(0);
            }
        }
    }

    #[test]
    fn key_has_requested_length() {
        let env = CounterEnv;
        for len in [0, 1, 26, 27, 1000] {
            assert_eq!(generate_key(&env, len).len(), len);
        }
    }

    #[test]
    fn key_is_a_valid_message() {
        let env = CounterEnv;
        let key = generate_key(&env, 2048);
        assert!(Message::parse(&key.to_bytes()).is_ok());
    }

    #[test]
    fn deterministic_env_gives_deterministic_key() {
        let env = CounterEnv;
        assert_eq!(generate_key(&env, 64), generate_key(&env, 64));
    }

    #[test]
    fn every_symbol_reachable() {
        let env = CounterEnv;
        let key = generate_key(&env, 4096);
        let mut seen = [false; 27];
        for symbol in key.symbols() {
            seen[usize::from(symbol.index())] = true;
        }
        assert!(seen.iter().all(|&s| s), "all 27 symbols should appear");
    }
}
