//! Deterministic simulation harness for the Vernam cipher services.
//!
//! Runs the production session code inside [turmoil] simulations: a
//! seeded [`SimEnv`] replaces system randomness and the turmoil virtual
//! clock replaces real time, so any failing run reproduces exactly from
//! its seed.
//!
//! The harness hosts the same `serve_connection` driver the production
//! server runs; only the listener and the environment differ.
//!
//! [turmoil]: https://docs.rs/turmoil

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod sim_env;
mod sim_server;

pub use sim_env::SimEnv;
pub use sim_server::run_sim_server;
