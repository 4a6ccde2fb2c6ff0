//! Feature policy for a patch run.
//!
//! `FeaturePolicy` is built once from the resolved configuration and is
//! read-only afterwards. `parse_feature_info` combines the line classifier
//! with the policy to describe the marker found on a line.

mod marker;


use std::collections::{BTreeMap, BTreeSet};

pub use marker::{FeatureMarker, MarkerState, parse_feature_info};

/// Enabled, disabled, discarded and string-valued features for one ABI.
///
/// A name may appear in several sets. Discarding wins over everything,
/// string substitution wins over toggling, and enabled wins over disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePolicy {
    enabled: BTreeSet<String>,
    disabled: BTreeSet<String>,
    discarded: BTreeSet<String>,
    xstrings: BTreeMap<String, String>,
}

impl FeaturePolicy {
    /// Build a policy from its four inputs.
    pub fn new<E, D, X, S>(enabled: E, disabled: D, discarded: X, xstrings: S) -> Self
    where
        E: IntoIterator<Item = String>,
        D: IntoIterator<Item = String>,
        X: IntoIterator<Item = String>,
        S: IntoIterator<Item = (String, String)>,
    {
        Self {
            enabled: enabled.into_iter().collect(),
            disabled: disabled.into_iter().collect(),
            discarded: discarded.into_iter().collect(),
            xstrings: xstrings.into_iter().collect(),
        }
    }

    /// Whether lines defining or undefining `name` must be deleted.
    pub fn feature_to_discard(&self, name: &str) -> bool {
        self.discarded.contains(name)
    }

    /// Required toggle state: `Some(true)` if enabled, `Some(false)` if
    /// disabled, `None` when the policy has no opinion.
    pub fn feature_status(&self, name: &str) -> Option<bool> {
        if self.enabled.contains(name) {
            Some(true)
        } else if self.disabled.contains(name) {
            Some(false)
        } else {
            None
        }
    }

    /// Required literal value for a string-substituted feature.
    pub fn xstring(&self, name: &str) -> Option<&str> {
        self.xstrings.get(name).map(String::as_str)
    }

    pub fn enabled(&self) -> &BTreeSet<String> {
        &self.enabled
    }

    pub fn disabled(&self) -> &BTreeSet<String> {
        &self.disabled
    }

    pub fn discarded(&self) -> &BTreeSet<String> {
        &self.discarded
    }

    pub fn xstrings(&self) -> &BTreeMap<String, String> {
        &self.xstrings
    }
}
