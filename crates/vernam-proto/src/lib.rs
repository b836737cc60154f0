//! Wire-level types for the Vernam cipher services.
//!
//! This crate defines everything both ends of a connection must agree on:
//!
//! - The 27-symbol cipher alphabet ([`alphabet::Symbol`])
//! - Bounded symbol sequences exchanged as logical units ([`message::Message`])
//! - The fixed handshake greetings for each service pairing ([`role::Role`])
//! - Length-prefixed framing for logical messages ([`frame::FrameHeader`])
//!
//! Everything here is pure data: no I/O, no async, no policy. Protocol
//! behavior lives in `vernam-core`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alphabet;
pub mod frame;
pub mod message;
pub mod role;

pub use alphabet::{ALPHABET_LEN, Symbol};
pub use frame::{FrameError, FrameHeader, encode_frame};
pub use message::{MAX_MESSAGE_LEN, Message, MessageError};
pub use role::Role;
