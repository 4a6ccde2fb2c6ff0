//! Human-readable record of the edits made during a patch run.

use serde::Serialize;
use std::fmt;

/// Printed between edits.
pub const SEPARATOR: &str = "    |";

/// Prefix for lines taken out of the file.
const REMOVED_PREFIX: &str = "<<< |";

/// Prefix for lines put into the file.
const ADDED_PREFIX: &str = ">>> |";

/// A single edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Edit {
    /// A discarded marker, preceded by its explanatory comment when there was one.
    Removal { lines: Vec<String> },
    /// One line rewritten in place.
    Substitution {
        original: String,
        replacement: String,
    },
}

/// Ordered edits of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    edits: Vec<Edit>,
}

impl Transcript {
    pub fn record_removal(&mut self, lines: Vec<String>) {
        self.edits.push(Edit::Removal { lines });
    }

    pub fn record_substitution(&mut self, original: String, replacement: String) {
        self.edits.push(Edit::Substitution {
            original,
            replacement,
        });
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Renders the diff-like text form.
///
/// The separator is skipped until the first substitution has been printed;
/// removals before that point are not separated from each other.
impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for edit in &self.edits {
            if !first {
                writeln!(f, "{SEPARATOR}")?;
            }
            match edit {
                Edit::Removal { lines } => {
                    for line in lines {
                        writeln!(f, "{REMOVED_PREFIX}{line}|")?;
                    }
                }
                Edit::Substitution {
                    original,
                    replacement,
                } => {
                    writeln!(f, "{REMOVED_PREFIX}{original}|")?;
                    writeln!(f, "{ADDED_PREFIX}{replacement}|")?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}
