//! xpatch: rewrite `#define`/`#undef` feature toggles in a header for one
//! target ABI, driven by an INI feature policy.
//!
//! This is the main entry point for the `xpatch` CLI. It parses arguments,
//! sets up logging, runs the patch and maps errors to exit codes.

mod abi;
mod classify;
mod cli;
mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod policy;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match commands::run(&cli, &mut stdout) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Log to stderr so the transcript on stdout stays clean. `RUST_LOG` wins
/// over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
