//! Vernam production server.
//!
//! This crate provides the production acceptor for both cipher services
//! using:
//! - Tokio for async runtime and TCP transport
//! - System time and cryptographic RNG
//!
//! ## Architecture
//!
//! ```text
//! vernam-server
//!   ├─ Server             (TCP acceptor + JoinSet supervisor)
//!   └─ serve_connection   (per-session driver over ServerSession)
//! ```
//!
//! Each accepted connection runs in its own task with no shared mutable
//! state, so a slow or failing session never affects its siblings. The
//! supervisor reaps completed tasks as it accepts and drains the rest on
//! shutdown.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod error;

use std::time::Duration;

pub use connection::serve_connection;
pub use error::ServerError;
use tokio::{net::TcpListener, task::JoinSet};
pub use vernam_core::SystemEnv;
use vernam_core::{ContentPolicy, Environment};
use vernam_proto::Role;

/// Server configuration for the production runtime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g. "0.0.0.0:57111")
    pub bind_address: String,
    /// Which cipher service this instance provides.
    pub role: Role,
    /// Per-session limit on waiting for the next logical message.
    pub read_timeout: Duration,
    /// Disallowed-character set for the encrypt service.
    pub policy: ContentPolicy,
}

impl ServerConfig {
    /// Config for `role` on `bind_address` with default timeout and policy.
    pub fn new(role: Role, bind_address: impl Into<String>) -> Self {
        Self {
            bind_address: bind_address.into(),
            role,
            read_timeout: Duration::from_secs(30),
            policy: ContentPolicy::default(),
        }
    }
}

/// Production Vernam cipher server.
///
/// Binds one TCP listener and serves one role (encrypt or decrypt). The
/// two services are deployed as independent processes, never as one.
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
    env: SystemEnv,
}

impl Server {
    /// Create and bind a new server.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the configured address fails.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.bind_address).await?;
        Ok(Self { listener, config, env: SystemEnv::new() })
    }

    /// Get the local address the server is bound to.
    pub fn local_addr(&self) -> Result<std::net::SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the server, accepting connections until shutdown (ctrl-c), then
    /// drain in-flight sessions so no task outlives the process.
    ///
    /// The accept loop blocks only on "accept next connection"; session
    /// errors are logged and never stop the loop.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(role = %self.config.role, addr = %self.local_addr()?, "server listening");

        let mut sessions: JoinSet<()> = JoinSet::new();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let session_id = self.env.random_u64();
                        let config = self.config.clone();
                        let env = self.env.clone();

                        tracing::debug!(session_id, %peer, "connection accepted");

                        sessions.spawn(async move {
                            let result = serve_connection(
                                stream,
                                session_id,
                                config.role,
                                config.policy,
                                config.read_timeout,
                                &env,
                            )
                            .await;

                            if let Err(e) = result {
                                tracing::warn!(session_id, error = %e, "session failed");
                            }
                        });
                    },
                    Err(e) => {
                        tracing::error!(error = %e, "accept error");
                    },
                },

                // Reap completed sessions so the set never grows unbounded.
                Some(joined) = sessions.join_next(), if !sessions.is_empty() => {
                    if let Err(e) = joined {
                        tracing::error!(error = %e, "session task panicked");
                    }
                },

                _ = &mut shutdown => break,
            }
        }

        tracing::info!(active = sessions.len(), "shutting down, draining sessions");
        while let Some(joined) = sessions.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "session task panicked");
            }
        }

        Ok(())
    }
}
