//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples protocol logic from system resources
//! (time, randomness). This enables:
//!
//! - Deterministic simulation: Turmoil provides a virtual clock and the
//!   harness a seeded RNG, so a failing run reproduces exactly.
//! - Production runtime: Tokio implementations use real system resources
//!   without any code changes to the protocol logic.
//!
//! # Invariants
//!
//! - Monotonicity: `env.now()` must never go backwards
//! - Determinism: given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: implementations must not share global state

use std::time::{Duration, Instant};

/// Abstract environment providing time and randomness.
///
/// Implementations MUST guarantee:
///
/// 1. Time monotonicity: `now()` never goes backwards
/// 2. RNG quality: `random_bytes()` uses cryptographically secure entropy
///    in production (the key generator depends on it)
/// 3. Minimal panics: methods are infallible except in exceptional
///    circumstances (e.g. OS entropy exhaustion)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> Instant;

    /// Sleeps for the specified duration.
    ///
    /// This is the only async method in the trait; it is used by driver
    /// code (session read timeouts), never by protocol logic.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;

    /// Fills the provided buffer with random bytes.
    ///
    /// Production implementations use the OS entropy pool (`getrandom`);
    /// simulation implementations use a seeded RNG and log the seed for
    /// reproducibility.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    ///
    /// Convenience for session IDs.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}
