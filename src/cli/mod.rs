//! CLI argument parsing for xpatch.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `commands` module.

use crate::abi::Abi;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// xpatch: rewrite feature toggles in a header for one target ABI.
///
/// Every `#define NAME VALUE` / `#undef NAME` line is checked against the
/// `[all]` and `[<abi>]` sections of the config, then kept, rewritten or
/// removed. Each change is printed as a before/after transcript.
#[derive(Parser, Debug)]
#[command(name = "xpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target ABI; selects the config section layered over `[all]`.
    #[arg(long, value_enum)]
    pub abi: Abi,

    /// INI file with the feature policy.
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// Header to patch.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Where to write the patched header.
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Print the transcript without writing the output file.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON instead of the text transcript.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
