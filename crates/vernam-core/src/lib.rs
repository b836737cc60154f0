//! Protocol logic for the Vernam cipher services.
//!
//! This crate holds everything between the wire types (`vernam-proto`) and
//! the runtimes (`vernam-server`, `vernam-client`):
//!
//! - [`cipher`]: the pure substitution-cipher engine
//! - [`validate`]: operand validation and the encrypt-side content policy
//! - [`session`]: the server-side session state machine (event in, actions
//!   out; the driver owns all I/O)
//! - [`framing`]: async read/write of length-prefixed logical messages
//! - [`keygen`]: uniform key generation over the alphabet
//! - [`env`]: the `Environment` abstraction for time and randomness, with
//!   the production implementation in [`system_env`]
//!
//! Protocol logic is deterministic and I/O-free, so the identical code runs
//! under the production tokio runtime and the turmoil simulation harness.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cipher;
pub mod env;
pub mod error;
pub mod framing;
pub mod keygen;
pub mod session;
pub mod system_env;
pub mod validate;

pub use cipher::{Direction, transform};
pub use env::Environment;
pub use system_env::SystemEnv;
pub use error::SessionError;
pub use framing::{WireError, read_message, write_frame, write_message};
pub use keygen::generate_key;
pub use session::{ServerSession, SessionAction, SessionState};
pub use validate::{ContentPolicy, Operands, prepare};
