//! Marker extraction: what a line currently says about a feature.

use super::FeaturePolicy;
use crate::classify::{fetch_define, fetch_undef, strip_comment};

/// Current state of a feature as written on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState<'a> {
    /// `#define NAME 1`.
    Enabled,
    /// `#undef NAME`, possibly inside a one-line comment.
    Disabled,
    /// Raw `#define` value of a string-substituted feature.
    Value(&'a str),
    /// A define with a non-boolean value, or a discarded feature whose value
    /// is irrelevant.
    Opaque,
}

impl MarkerState<'_> {
    /// Boolean view of the state, `None` for anything but a plain toggle.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MarkerState::Enabled => Some(true),
            MarkerState::Disabled => Some(false),
            MarkerState::Value(_) | MarkerState::Opaque => None,
        }
    }
}

/// A feature marker recognised on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureMarker<'a> {
    pub name: &'a str,
    pub state: MarkerState<'a>,
}

/// Classify `line` as a feature marker, if it is one.
///
/// A wrapping one-line comment is stripped first, so `/* #define FOO 1 */`
/// still names `FOO`.
pub fn parse_feature_info<'a>(line: &'a str, policy: &FeaturePolicy) -> Option<FeatureMarker<'a>> {
    let line = strip_comment(line);

    if let Some((name, value)) = fetch_define(line) {
        let state = if policy.feature_to_discard(name) {
            MarkerState::Opaque
        } else if policy.xstring(name).is_some() {
            MarkerState::Value(value)
        } else if value == "1" {
            MarkerState::Enabled
        } else {
            MarkerState::Opaque
        };
        return Some(FeatureMarker { name, state });
    }

    if let Some(name) = fetch_undef(line) {
        let state = if policy.feature_to_discard(name) {
            MarkerState::Opaque
        } else {
            MarkerState::Disabled
        };
        return Some(FeatureMarker { name, state });
    }

    None
}
