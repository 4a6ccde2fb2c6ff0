//! Run report rendering: the text transcript or a JSON document.

use crate::abi::Abi;
use crate::engine::{Edit, Transcript};
use crate::error::{Result, XpatchError};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Number of dashes in the banner around the transcript.
const BANNER_WIDTH: usize = 32;

/// `[<abi>] ----...`
pub(crate) fn banner(abi: Abi) -> String {
    format!("[{}] {}", abi, "-".repeat(BANNER_WIDTH))
}

/// Opening banner followed by the transcript.
pub(crate) fn write_transcript(out: &mut dyn Write, abi: Abi, transcript: &Transcript) -> Result<()> {
    writeln!(out, "{}", banner(abi)).map_err(report_error)?;
    write!(out, "{}", transcript).map_err(report_error)
}

/// Closing banner and the resolved paths.
pub(crate) fn write_footer(
    out: &mut dyn Write,
    abi: Abi,
    input: &Path,
    output: &Path,
    written: bool,
) -> Result<()> {
    writeln!(out, "{}", banner(abi)).map_err(report_error)?;
    writeln!(out, "Input file: '{}'", input.display()).map_err(report_error)?;
    if written {
        writeln!(out, "Generated file: '{}'", output.display()).map_err(report_error)
    } else {
        writeln!(out, "Dry run: '{}' not written", output.display()).map_err(report_error)
    }
}

/// Machine-readable summary of a run.
#[derive(Debug, Serialize)]
pub(crate) struct RunReport<'a> {
    pub abi: Abi,
    pub input: &'a Path,
    pub output: &'a Path,
    pub written: bool,
    pub removals: usize,
    pub substitutions: usize,
    pub edits: &'a Transcript,
}

impl<'a> RunReport<'a> {
    pub(crate) fn new(
        abi: Abi,
        input: &'a Path,
        output: &'a Path,
        written: bool,
        edits: &'a Transcript,
    ) -> Self {
        let removals = edits
            .edits()
            .iter()
            .filter(|edit| matches!(edit, Edit::Removal { .. }))
            .count();
        Self {
            abi,
            input,
            output,
            written,
            removals,
            substitutions: edits.edits().len() - removals,
            edits,
        }
    }
}

pub(crate) fn write_json(out: &mut dyn Write, report: &RunReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(|e| {
        XpatchError::IoError(format!("failed to write JSON report: {}", e))
    })?;
    writeln!(out).map_err(report_error)
}

fn report_error(e: std::io::Error) -> XpatchError {
    XpatchError::IoError(format!("failed to write report: {}", e))
}
