//! Tests for INI parsing and policy assembly.

use super::ini::IniDocument;
use super::loader::{load_policy, policy_from_ini};
use crate::abi::Abi;
use crate::error::XpatchError;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// INI reader
// ============================================================================

#[test]
fn test_parse_sections_and_options() {
    let doc = IniDocument::parse(
        "[all]\nENABLED_FEATURES = A B\nDISABLED_FEATURES: C\n\n[x86]\nXSTRINGS=V\n",
    )
    .unwrap();

    assert!(doc.has_section("all"));
    assert!(doc.has_section("x86"));
    assert!(!doc.has_section("arm"));
    assert_eq!(doc.get("all", "ENABLED_FEATURES").unwrap(), "A B");
    assert_eq!(doc.get("all", "DISABLED_FEATURES").unwrap(), "C");
    assert_eq!(doc.get("x86", "XSTRINGS").unwrap(), "V");
}

#[test]
fn test_keys_are_case_sensitive() {
    let doc = IniDocument::parse("[all]\nEnabled_Features = A\n").unwrap();
    assert!(doc.has_option("all", "Enabled_Features"));
    assert!(!doc.has_option("all", "ENABLED_FEATURES"));
}

#[test]
fn test_first_delimiter_splits() {
    let doc = IniDocument::parse("[all]\nXSTRING_URL = http://host:80/a=b\n").unwrap();
    assert_eq!(doc.get("all", "XSTRING_URL").unwrap(), "http://host:80/a=b");
}

#[test]
fn test_comments_and_no_inline_comments() {
    let doc = IniDocument::parse(
        "# leading comment\n; another\n[all]\n  # indented comment\nXSTRING_V = \"a\" ; kept\n",
    )
    .unwrap();
    assert_eq!(doc.get("all", "XSTRING_V").unwrap(), "\"a\" ; kept");
}

#[test]
fn test_continuation_lines() {
    let doc = IniDocument::parse(
        "[all]\nENABLED_FEATURES =\n    A\n    B\n\n    C\nDISABLED_FEATURES = D\n",
    )
    .unwrap();
    assert_eq!(doc.get("all", "ENABLED_FEATURES").unwrap(), "\nA\nB\n\nC");
    assert_eq!(doc.get("all", "DISABLED_FEATURES").unwrap(), "D");
}

#[test]
fn test_trailing_blank_lines_are_dropped() {
    let doc = IniDocument::parse("[all]\nA = 1\n\n\n[x86]\nB = 2\n").unwrap();
    assert_eq!(doc.get("all", "A").unwrap(), "1");
}

#[test]
fn test_default_section_fallback() {
    let doc = IniDocument::parse("[DEFAULT]\nSHARED = s\n[all]\nOWN = o\n").unwrap();
    assert!(doc.has_option("all", "SHARED"));
    assert_eq!(doc.get("all", "SHARED").unwrap(), "s");
    assert_eq!(doc.get("DEFAULT", "SHARED").unwrap(), "s");
    assert!(!doc.has_section("DEFAULT"));
    // Defaults do not make a missing section exist.
    assert!(!doc.has_option("arm", "SHARED"));
}

#[test]
fn test_empty_value() {
    let doc = IniDocument::parse("[all]\nENABLED_FEATURES =\n").unwrap();
    assert_eq!(doc.get("all", "ENABLED_FEATURES").unwrap(), "");
}

#[test]
fn test_missing_section_header_is_error() {
    let err = IniDocument::parse("KEY = value\n").unwrap_err();
    assert!(matches!(err, XpatchError::ConfigError(_)));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_line_without_delimiter_is_error() {
    let err = IniDocument::parse("[all]\nJUST_A_KEY\n").unwrap_err();
    assert!(matches!(err, XpatchError::ConfigError(_)));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_empty_option_name_is_error() {
    let err = IniDocument::parse("[all]\n= value\n").unwrap_err();
    assert!(matches!(err, XpatchError::ConfigError(_)));
}

#[test]
fn test_duplicate_section_is_error() {
    let err = IniDocument::parse("[all]\nA = 1\n[all]\nB = 2\n").unwrap_err();
    assert!(err.to_string().contains("section 'all' already exists"));
}

#[test]
fn test_duplicate_option_is_error() {
    let err = IniDocument::parse("[all]\nA = 1\nA = 2\n").unwrap_err();
    assert!(err.to_string().contains("option 'A' in section 'all' already exists"));
}

#[test]
fn test_get_missing_section_and_option() {
    let doc = IniDocument::parse("[all]\nA = 1\n").unwrap();
    let err = doc.get("arm", "A").unwrap_err();
    assert!(err.to_string().contains("no section 'arm'"));
    let err = doc.get("all", "B").unwrap_err();
    assert!(err.to_string().contains("no option 'B' in section 'all'"));
}

// ============================================================================
// Policy assembly
// ============================================================================

const SAMPLE: &str = r#"
[all]
ENABLED_FEATURES = HAVE_A HAVE_B
DISABLED_FEATURES = HAVE_C
DISCARDED_FEATURES = HAVE_DEBUG
XSTRINGS = VERSION VENDOR
XSTRING_VERSION = "1.0"
XSTRING_VENDOR = "acme"

[arm64]
ENABLED_FEATURES = HAVE_NEON
DISABLED_FEATURES = HAVE_SSE
XSTRINGS = VERSION
XSTRING_VERSION = "1.0-arm64"
"#;

#[test]
fn test_policy_unions_global_and_abi() {
    let doc = IniDocument::parse(SAMPLE).unwrap();
    let policy = policy_from_ini(&doc, Abi::Arm64).unwrap();

    assert_eq!(policy.feature_status("HAVE_A"), Some(true));
    assert_eq!(policy.feature_status("HAVE_NEON"), Some(true));
    assert_eq!(policy.feature_status("HAVE_C"), Some(false));
    assert_eq!(policy.feature_status("HAVE_SSE"), Some(false));
    assert!(policy.feature_to_discard("HAVE_DEBUG"));
    assert_eq!(policy.xstring("VERSION"), Some("\"1.0-arm64\""));
    assert_eq!(policy.xstring("VENDOR"), Some("\"acme\""));
}

#[test]
fn test_policy_without_abi_section() {
    let doc = IniDocument::parse(SAMPLE).unwrap();
    let policy = policy_from_ini(&doc, Abi::X86).unwrap();

    assert_eq!(policy.feature_status("HAVE_NEON"), None);
    assert_eq!(policy.feature_status("HAVE_SSE"), None);
    assert_eq!(policy.xstring("VERSION"), Some("\"1.0\""));
}

#[test]
fn test_policy_from_empty_config() {
    let doc = IniDocument::parse("").unwrap();
    let policy = policy_from_ini(&doc, Abi::Arm).unwrap();
    assert!(policy.enabled().is_empty());
    assert!(policy.disabled().is_empty());
    assert!(policy.discarded().is_empty());
    assert!(policy.xstrings().is_empty());
}

#[test]
fn test_policy_missing_xstring_value_is_error() {
    let doc = IniDocument::parse("[all]\nXSTRINGS = VERSION\n").unwrap();
    let err = policy_from_ini(&doc, Abi::X86).unwrap_err();
    assert!(matches!(err, XpatchError::ConfigError(_)));
    assert!(
        err.to_string()
            .contains("no option 'XSTRING_VERSION' in section 'all'")
    );
}

#[test]
fn test_policy_abi_xstring_must_be_in_abi_section() {
    // The value for an ABI-listed xstring is not taken from the global section.
    let doc =
        IniDocument::parse("[all]\nXSTRING_V = g\n[macosx]\nXSTRINGS = V\n").unwrap();
    let err = policy_from_ini(&doc, Abi::MacOsX).unwrap_err();
    assert!(err.to_string().contains("section 'macosx'"));
}

#[test]
fn test_policy_default_section_applies_to_both() {
    let doc = IniDocument::parse("[DEFAULT]\nENABLED_FEATURES = X\n[all]\n[x86]\n").unwrap();
    let policy = policy_from_ini(&doc, Abi::X86).unwrap();
    assert_eq!(policy.enabled().len(), 1);
    assert_eq!(policy.feature_status("X"), Some(true));
}

#[test]
fn test_load_policy_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("xpatch.ini");
    fs::write(&path, SAMPLE).unwrap();

    let policy = load_policy(&path, Abi::Arm64).unwrap();
    assert!(policy.feature_to_discard("HAVE_DEBUG"));
}

#[test]
fn test_load_policy_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.ini");

    let err = load_policy(&path, Abi::X86).unwrap_err();
    assert!(matches!(err, XpatchError::IoError(_)));
    assert!(err.to_string().contains("missing.ini"));
}

#[test]
fn test_load_policy_parse_error_names_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.ini");
    fs::write(&path, "no header\n").unwrap();

    let err = load_policy(&path, Abi::X86).unwrap_err();
    assert!(matches!(err, XpatchError::ConfigError(_)));
    assert!(err.to_string().contains("broken.ini"));
}
