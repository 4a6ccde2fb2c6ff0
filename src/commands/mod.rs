//! The patch run.
//!
//! Resolves the command-line paths, loads the feature policy for the chosen
//! ABI, patches the input and writes the result. The report goes to `out`
//! (stdout in the binary); diagnostics go through `tracing`.

mod report;


use crate::cli::Cli;
use crate::config::load_policy;
use crate::engine::{apply_patch, encode_ascii};
use crate::error::{Result, XpatchError};
use crate::fs::{absolute_normalized, atomic_write};
use report::RunReport;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Absolute, normalised paths of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub config: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    /// Resolve the three paths given on the command line.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Ok(Self {
            config: resolve_flag("--config", &cli.config)?,
            input: resolve_flag("--input", &cli.input)?,
            output: resolve_flag("--output", &cli.output)?,
        })
    }
}

fn resolve_flag(flag: &str, path: &Path) -> Result<PathBuf> {
    absolute_normalized(path).map_err(|e| match e {
        XpatchError::ArgumentError(msg) => XpatchError::ArgumentError(format!("{}: {}", flag, msg)),
        other => other,
    })
}

/// Run the patch described by `cli`, writing the report to `out`.
///
/// The opening banner and transcript are printed before the output is
/// encoded and written; on failure the output file is left untouched.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let paths = RunPaths::resolve(cli)?;
    let policy = load_policy(&paths.config, cli.abi)?;

    let content = std::fs::read_to_string(&paths.input).map_err(|e| {
        XpatchError::IoError(format!(
            "failed to read input file '{}': {}",
            paths.input.display(),
            e
        ))
    })?;

    let outcome = apply_patch(&policy, &content);
    if outcome.transcript.is_empty() {
        info!("input already matches the policy");
    }

    if !cli.json {
        report::write_transcript(out, cli.abi, &outcome.transcript)?;
    }

    let bytes = encode_ascii(&outcome.lines)?;
    let written = !cli.dry_run;
    if written {
        atomic_write(&paths.output, &bytes)?;
    }

    info!(
        input = %paths.input.display(),
        output = %paths.output.display(),
        edits = outcome.transcript.edits().len(),
        lines = outcome.lines.len(),
        written,
        "patch complete"
    );

    if cli.json {
        let report = RunReport::new(
            cli.abi,
            &paths.input,
            &paths.output,
            written,
            &outcome.transcript,
        );
        report::write_json(out, &report)
    } else {
        report::write_footer(out, cli.abi, &paths.input, &paths.output, written)
    }
}
