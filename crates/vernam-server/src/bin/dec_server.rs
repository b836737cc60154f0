//! Decryption service binary.
//!
//! # Usage
//!
//! ```bash
//! vernam-dec-server --bind 0.0.0.0:57112
//! ```
//!
//! Speaks the `DEC_CLIENT` / `DEC_SERVER` pairing only; encrypt clients
//! are rejected at the handshake.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vernam_proto::Role;
use vernam_server::{Server, ServerConfig};

/// Vernam decryption service
#[derive(Parser, Debug)]
#[command(name = "vernam-dec-server")]
#[command(about = "Vernam one-time-pad decryption service")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(short, long, default_value = "0.0.0.0:57112")]
    bind: String,

    /// Per-session read timeout in seconds
    #[arg(long, default_value = "30")]
    read_timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let mut config = ServerConfig::new(Role::Decrypt, args.bind);
    config.read_timeout = Duration::from_secs(args.read_timeout);

    let server = Server::bind(config).await?;

    tracing::info!("decryption service listening on {}", server.local_addr()?);

    server.run().await?;

    Ok(())
}
