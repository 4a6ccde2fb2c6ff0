//! Configuration for xpatch.
//!
//! The configuration is an INI file with a global `[all]` section and one
//! section per ABI. Each may list `ENABLED_FEATURES`, `DISABLED_FEATURES`,
//! `DISCARDED_FEATURES` and `XSTRINGS`; every name in `XSTRINGS` needs a
//! matching `XSTRING_<name>` option holding the literal value.

mod ini;
mod loader;

#[cfg(test)]
mod tests;

// Re-export public API
pub use loader::load_policy;
