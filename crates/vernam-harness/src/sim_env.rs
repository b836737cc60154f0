//! Seeded Environment implementation for simulation.

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vernam_core::Environment;

/// Simulation environment with seeded randomness.
///
/// Time comes from `Instant::now()`, which turmoil virtualizes inside a
/// simulation; randomness comes from a ChaCha8 stream seeded by the test,
/// so a failing run reproduces exactly.
#[derive(Clone)]
pub struct SimEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl SimEnv {
    /// Create an environment with the given RNG seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }
}

impl Environment for SimEnv {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        match self.rng.lock() {
            Ok(mut rng) => rng.fill_bytes(buffer),
            Err(poisoned) => {
                // A panicked sibling task poisoned the lock. The test is
                // already failing; keep the buffer deterministic.
                tracing::error!("simulation RNG lock poisoned: {}", poisoned);
                buffer.fill(0);
            }
        }
    }
}
