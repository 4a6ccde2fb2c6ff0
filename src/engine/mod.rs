//! Patch engine.
//!
//! A single pass over the input lines. Each line is classified, checked
//! against the feature policy and then kept, discarded or rewritten. Every
//! discard and rewrite is recorded in a [`Transcript`].
//!
//! Decision order for a recognised feature:
//! 1. discarded: drop the line and an explanatory one-line comment above it
//! 2. string substitution: rewrite the value unless it already matches
//! 3. boolean toggle: enable with `#define NAME 1`, disable with
//!    `/* #undef NAME */`

mod buffer;
mod encode;
mod transcript;


use crate::policy::{FeaturePolicy, MarkerState, parse_feature_info};
use buffer::OutputBuffer;
use tracing::debug;

pub use encode::encode_ascii;
pub use transcript::{Edit, Transcript};

/// Result of patching one file.
#[derive(Debug, Clone, Default)]
pub struct PatchOutcome {
    /// Output lines, without terminators.
    pub lines: Vec<String>,
    pub transcript: Transcript,
}

/// What to do with a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineAction {
    Keep,
    Discard,
    Replace(String),
}

/// Split file content into lines, dropping terminators.
///
/// `\r\n`, `\n` and a lone `\r` each end a line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + width..];
        Some(line)
    })
}

/// Patch `content` according to `policy`.
pub fn apply_patch(policy: &FeaturePolicy, content: &str) -> PatchOutcome {
    let mut output = OutputBuffer::default();
    let mut transcript = Transcript::default();

    for (idx, line) in split_lines(content).enumerate() {
        match decide(policy, line) {
            LineAction::Keep => output.push(line.to_string()),
            LineAction::Discard => {
                debug!(line = idx + 1, "discarding '{}'", line);
                let mut removed = Vec::with_capacity(2);
                if let Some(comment) = output.retract_comment() {
                    removed.push(comment);
                }
                removed.push(line.to_string());
                transcript.record_removal(removed);
            }
            LineAction::Replace(replacement) => {
                debug!(line = idx + 1, "rewriting '{}' as '{}'", line, replacement);
                output.push(replacement.clone());
                transcript.record_substitution(line.to_string(), replacement);
            }
        }
    }

    PatchOutcome {
        lines: output.into_lines(),
        transcript,
    }
}

/// Decide the fate of one line.
fn decide(policy: &FeaturePolicy, line: &str) -> LineAction {
    let Some(marker) = parse_feature_info(line, policy) else {
        return LineAction::Keep;
    };
    let name = marker.name;

    if policy.feature_to_discard(name) {
        return LineAction::Discard;
    }

    if let Some(required) = policy.xstring(name) {
        if marker.state == MarkerState::Value(required) {
            return LineAction::Keep;
        }
        return LineAction::Replace(format!("#define {name} {required}"));
    }

    let current = marker.state.as_bool();
    match policy.feature_status(name) {
        Some(true) if current == Some(false) => LineAction::Replace(format!("#define {name} 1")),
        // A non-boolean define counts as "on" when the feature must be off.
        Some(false) if current != Some(false) => {
            LineAction::Replace(format!("/* #undef {name} */"))
        }
        _ => LineAction::Keep,
    }
}
