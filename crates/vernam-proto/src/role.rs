//! Service role identity and handshake greetings.
//!
//! Two independent pairings exist and must never be mixed: the encrypt
//! pairing (`ENC_CLIENT` / `ENC_SERVER`) and the decrypt pairing
//! (`DEC_CLIENT` / `DEC_SERVER`). A server only answers the greeting of
//! its own pairing; anything else is a protocol violation.

/// Which cipher service a connection pair implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

impl Role {
    /// Greeting a client of this role opens the connection with.
    pub const fn client_greeting(self) -> &'static [u8] {
        match self {
            Self::Encrypt => b"ENC_CLIENT",
            Self::Decrypt => b"DEC_CLIENT",
        }
    }

    /// Acknowledgment the server answers a correct greeting with.
    pub const fn server_greeting(self) -> &'static [u8] {
        match self {
            Self::Encrypt => b"ENC_SERVER",
            Self::Decrypt => b"DEC_SERVER",
        }
    }

    /// The other pairing.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }

    /// Short name used in logs and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
