//! Simulated service host.

use std::time::Duration;

use vernam_core::{ContentPolicy, Environment};
use vernam_proto::Role;
use vernam_server::serve_connection;

/// Accept loop for one simulated service.
///
/// Binds a turmoil listener on `port` and serves each connection with the
/// production session driver. Runs until the simulation tears the host
/// down; intended as the body of a `sim.host(..)` closure.
///
/// # Errors
///
/// Returns any bind or accept error to fail the simulation.
pub async fn run_sim_server(
    role: Role,
    port: u16,
    env: crate::SimEnv,
) -> turmoil::Result {
    let listener = turmoil::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(service = role.name(), port, "simulated service listening");

    loop {
        let (stream, peer) = listener.accept().await?;
        let session_id = env.random_u64();
        let env = env.clone();

        tokio::spawn(async move {
            tracing::debug!(session_id, %peer, "session accepted");
            if let Err(e) = serve_connection(
                stream,
                session_id,
                role,
                ContentPolicy::default(),
                Duration::from_secs(30),
                &env,
            )
            .await
            {
                tracing::debug!(session_id, error = %e, "session ended with error");
            }
        });
    }
}
