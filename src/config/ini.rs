//! INI document reader.
//!
//! Follows the defaults of the `RawConfigParser` dialect the patch configs are
//! written in:
//! - `[section]` headers; `[DEFAULT]` holds fallbacks for every section
//! - `key = value` or `key: value`, split at the first delimiter
//! - case-sensitive keys, no interpolation, no inline comments
//! - full-line comments starting with `#` or `;`
//! - deeper-indented lines continue the previous value

use crate::error::{Result, XpatchError};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Name of the fallback section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+)\]").expect("Invalid section header regex"));

static OPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*[=:]\s*(.*)$").expect("Invalid option line regex")
});

const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

type Options = BTreeMap<String, String>;

/// A parsed INI file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    defaults: Options,
    sections: BTreeMap<String, Options>,
}

/// Which section new options go to while parsing.
enum Cursor {
    Defaults,
    Section(String),
}

impl IniDocument {
    /// Read and parse an INI file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            XpatchError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content).map_err(|e| match e {
            XpatchError::ConfigError(msg) => {
                XpatchError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse INI text.
    pub fn parse(text: &str) -> Result<Self> {
        // Values are collected as raw pieces and joined once the file is read.
        let mut defaults: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut sections: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();

        let mut cursor: Option<Cursor> = None;
        let mut option: Option<String> = None;
        let mut indent_level = usize::MAX;

        for (idx, raw) in text.lines().enumerate() {
            let lineno = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIXES) {
                // A blank line may belong to a continued value; a comment never does.
                if trimmed.is_empty()
                    && let (Some(cursor), Some(name)) = (&cursor, &option)
                {
                    let target = match cursor {
                        Cursor::Defaults => &mut defaults,
                        Cursor::Section(section) => sections.entry(section.clone()).or_default(),
                    };
                    if let Some(pieces) = target.get_mut(name) {
                        pieces.push(String::new());
                    }
                }
                continue;
            }

            let cur_indent = raw.len() - raw.trim_start().len();

            if let (Some(cursor), Some(name)) = (&cursor, &option)
                && cur_indent > indent_level
            {
                let target = match cursor {
                    Cursor::Defaults => &mut defaults,
                    Cursor::Section(section) => sections.entry(section.clone()).or_default(),
                };
                if let Some(pieces) = target.get_mut(name) {
                    pieces.push(trimmed.to_string());
                }
                continue;
            }

            indent_level = cur_indent;

            if let Some(caps) = SECTION_REGEX.captures(trimmed) {
                let name = caps[1].to_string();
                if name == DEFAULT_SECTION {
                    cursor = Some(Cursor::Defaults);
                } else {
                    if sections.contains_key(&name) {
                        return Err(XpatchError::ConfigError(format!(
                            "line {}: section '{}' already exists",
                            lineno, name
                        )));
                    }
                    sections.insert(name.clone(), BTreeMap::new());
                    cursor = Some(Cursor::Section(name));
                }
                option = None;
                continue;
            }

            let Some(current) = &cursor else {
                return Err(XpatchError::ConfigError(format!(
                    "line {}: option outside of any section: '{}'",
                    lineno, raw
                )));
            };

            let Some(caps) = OPTION_REGEX.captures(trimmed) else {
                return Err(XpatchError::ConfigError(format!(
                    "line {}: expected 'key = value', found '{}'",
                    lineno, raw
                )));
            };

            let key = caps[1].trim_end().to_string();
            if key.is_empty() {
                return Err(XpatchError::ConfigError(format!(
                    "line {}: option name is empty in '{}'",
                    lineno, raw
                )));
            }
            let value = caps[2].trim().to_string();

            let (section_name, target) = match current {
                Cursor::Defaults => (DEFAULT_SECTION, &mut defaults),
                Cursor::Section(section) => (
                    section.as_str(),
                    sections.entry(section.clone()).or_default(),
                ),
            };
            if target.contains_key(&key) {
                return Err(XpatchError::ConfigError(format!(
                    "line {}: option '{}' in section '{}' already exists",
                    lineno, key, section_name
                )));
            }
            target.insert(key.clone(), vec![value]);
            option = Some(key);
        }

        Ok(Self {
            defaults: join_values(defaults),
            sections: sections
                .into_iter()
                .map(|(name, options)| (name, join_values(options)))
                .collect(),
        })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Whether `option` is visible in `section`, including `[DEFAULT]` fallbacks.
    ///
    /// A missing section has no options.
    pub fn has_option(&self, section: &str, option: &str) -> bool {
        if section.is_empty() || section == DEFAULT_SECTION {
            return self.defaults.contains_key(option);
        }
        match self.sections.get(section) {
            Some(options) => options.contains_key(option) || self.defaults.contains_key(option),
            None => false,
        }
    }

    /// Look up a required option.
    pub fn get(&self, section: &str, option: &str) -> Result<&str> {
        let options = if section == DEFAULT_SECTION {
            None
        } else {
            Some(self.sections.get(section).ok_or_else(|| {
                XpatchError::ConfigError(format!("no section '{}'", section))
            })?)
        };

        options
            .and_then(|opts| opts.get(option))
            .or_else(|| self.defaults.get(option))
            .map(String::as_str)
            .ok_or_else(|| {
                XpatchError::ConfigError(format!(
                    "no option '{}' in section '{}'",
                    option, section
                ))
            })
    }
}

fn join_values(options: BTreeMap<String, Vec<String>>) -> Options {
    options
        .into_iter()
        .map(|(key, pieces)| (key, pieces.join("\n").trim_end().to_string()))
        .collect()
}
