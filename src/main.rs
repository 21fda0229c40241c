//! Shop ledger CLI
//!
//! Command-line access to the data directory of the shop and bank system.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- check
//! cargo run -- --data-dir /srv/shop normalize
//! cargo run -- transactions --account 7 --days 14
//! RUST_LOG=debug cargo run -- check
//! ```
//!
//! Diagnostics go to stderr through `tracing`; command output goes to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: A write failed, or output could not be produced
//! - 2: Invalid arguments (reported by clap)

use shop_ledger_store::cli;
use shop_ledger_store::persistence::Persistence;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let args = cli::parse_args();
    let store = Persistence::new(args.data_paths());

    let mut output = std::io::stdout().lock();
    if let Err(e) = cli::run(&args.command, &store, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
