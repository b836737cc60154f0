//! Key generator binary.
//!
//! # Usage
//!
//! ```bash
//! vernam-keygen 1024 > key
//! ```
//!
//! Prints a uniformly random key of the requested length over the message
//! alphabet (A-Z and space), followed by a newline.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vernam_client::SystemEnv;
use vernam_core::generate_key;
use vernam_proto::MAX_MESSAGE_LEN;

/// Vernam key generator
#[derive(Parser, Debug)]
#[command(name = "vernam-keygen")]
#[command(about = "Generate a random key over the message alphabet")]
#[command(version)]
struct Args {
    /// Key length in symbols
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_MESSAGE_LEN as i64))]
    length: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
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

    let key = generate_key(&SystemEnv::new(), args.length as usize);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(&key.to_bytes())
        .and_then(|()| stdout.write_all(b"\n"))
    {
        tracing::error!("cannot write key: {}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
