//! File input and pre-flight validation.

use std::path::Path;

use vernam_core::ContentPolicy;
use vernam_proto::{Message, Role};

use crate::error::ClientError;

/// Read a message file, stripping one trailing newline.
///
/// Message files end with a newline that is not part of the message; only
/// one is stripped, so embedded newlines still fail symbol validation.
pub fn read_message_file(path: &Path) -> Result<String, ClientError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|source| ClientError::File { path: path.to_path_buf(), source })?;

    Ok(contents.strip_suffix('\n').unwrap_or(&contents).to_string())
}

/// Client-side usage validation, before any network activity.
///
/// Checks the key-length contract, the content policy (encrypt only), and
/// that both operands parse as messages. Failing any of these is a usage
/// error (exit code 1) and the connection is never opened.
pub fn check_operands(
    payload: &str,
    key: &str,
    role: Role,
    policy: &ContentPolicy,
) -> Result<(), ClientError> {
    if key.len() < payload.len() {
        return Err(ClientError::KeyTooShort { key_len: key.len(), payload_len: payload.len() });
    }

    if role == Role::Encrypt && policy.refuses(payload.as_bytes()) {
        return Err(ClientError::DisallowedContent);
    }

    // Truncate on bytes: key files are not guaranteed to be ASCII, and a
    // str slice at an arbitrary byte index is a char-boundary panic.
    Message::parse_str(payload)?;
    Message::parse(&key.as_bytes()[..payload.len()])?;

    Ok(())
}
