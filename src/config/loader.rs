//! Feature policy assembly from the global and per-ABI sections.

use super::ini::IniDocument;
use crate::abi::Abi;
use crate::error::Result;
use crate::policy::FeaturePolicy;
use std::path::Path;
use tracing::{debug, info};

/// Section whose options apply to every ABI.
pub const GLOBAL_SECTION: &str = "all";

pub const ENABLED_FEATURES: &str = "ENABLED_FEATURES";
pub const DISABLED_FEATURES: &str = "DISABLED_FEATURES";
pub const DISCARDED_FEATURES: &str = "DISCARDED_FEATURES";
pub const XSTRINGS: &str = "XSTRINGS";

/// Prefix of the option holding the value of a listed xstring.
pub const XSTRING_PREFIX: &str = "XSTRING_";

/// Load the INI file at `path` and resolve the policy for `abi`.
pub fn load_policy<P: AsRef<Path>>(path: P, abi: Abi) -> Result<FeaturePolicy> {
    let path = path.as_ref();
    let doc = IniDocument::load(path)?;
    let policy = policy_from_ini(&doc, abi)?;

    info!(
        config = %path.display(),
        %abi,
        enabled = policy.enabled().len(),
        disabled = policy.disabled().len(),
        discarded = policy.discarded().len(),
        xstrings = policy.xstrings().len(),
        "resolved feature policy"
    );

    Ok(policy)
}

/// Resolve the policy for `abi`: global values first, then the ABI section.
///
/// Every name listed under `XSTRINGS` must have an `XSTRING_<name>` option in
/// the same section. ABI values override global ones.
pub fn policy_from_ini(doc: &IniDocument, abi: Abi) -> Result<FeaturePolicy> {
    let sections = [GLOBAL_SECTION, abi.as_str()];
    if !doc.has_section(abi.as_str()) {
        debug!("no [{}] section, using global policy only", abi);
    }

    let merged = |option: &str| -> Vec<String> {
        sections
            .iter()
            .flat_map(|section| optional_list(doc, section, option))
            .collect()
    };

    let mut xstrings = Vec::new();
    for section in sections {
        for name in optional_list(doc, section, XSTRINGS) {
            let option = format!("{}{}", XSTRING_PREFIX, name);
            let value = doc.get(section, &option)?.trim().to_string();
            xstrings.push((name, value));
        }
    }

    Ok(FeaturePolicy::new(
        merged(ENABLED_FEATURES),
        merged(DISABLED_FEATURES),
        merged(DISCARDED_FEATURES),
        xstrings,
    ))
}

/// Whitespace-separated names of an option, or nothing if it is absent.
fn optional_list(doc: &IniDocument, section: &str, option: &str) -> Vec<String> {
    if !doc.has_option(section, option) {
        return Vec::new();
    }
    doc.get(section, option)
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
