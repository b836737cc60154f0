//! Decryption client binary.
//!
//! # Usage
//!
//! ```bash
//! vernam-dec-client ciphertext key 57112
//! ```
//!
//! Reads the ciphertext and key files, validates them locally, runs one
//! exchange against the decryption service, and prints the recovered
//! plaintext to stdout followed by a newline.
//!
//! Exit codes: 1 for usage and validation errors, 2 for connection and
//! protocol errors.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vernam_client::{ClientError, check_operands, connect, read_message_file, run_exchange};
use vernam_core::ContentPolicy;
use vernam_proto::Role;

/// Vernam decryption client
#[derive(Parser, Debug)]
#[command(name = "vernam-dec-client")]
#[command(about = "Vernam one-time-pad decryption client")]
#[command(version)]
struct Args {
    /// File containing the ciphertext
    ciphertext: PathBuf,

    /// File containing the key
    key: PathBuf,

    /// Port the decryption service listens on
    port: u16,

    /// Host the decryption service listens on
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

async fn run(args: &Args) -> Result<(), ClientError> {
    let ciphertext = read_message_file(&args.ciphertext)?;
    let key = read_message_file(&args.key)?;

    check_operands(&ciphertext, &key, Role::Decrypt, &ContentPolicy::default())?;

    let mut stream = connect(&args.host, args.port).await?;
    let plaintext =
        run_exchange(&mut stream, Role::Decrypt, ciphertext.as_bytes(), key.as_bytes()).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext).map_err(ClientError::Output)?;
    stdout.write_all(b"\n").map_err(ClientError::Output)?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
