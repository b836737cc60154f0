//! Vernam client.
//!
//! Action-based client state machine for the Vernam cipher services, plus
//! the pieces the command-line tools share: file input, pre-flight
//! validation, and the async exchange driver.
//!
//! # Architecture
//!
//! The client is a pure state machine that:
//! - Receives logical messages from the caller
//! - Produces actions for the caller to execute (send frames, deliver the
//!   result)
//!
//! All validation a client can do locally (key length, content policy,
//! symbol check) happens before any network activity, so usage errors
//! never open a connection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod exchange;
mod input;
mod session;

pub use error::ClientError;
pub use exchange::{connect, run_exchange};
pub use input::{check_operands, read_message_file};
pub use session::{ClientAction, ClientSession, ClientState};
pub use vernam_core::SystemEnv;
