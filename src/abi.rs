//! Target platform identifiers.
//!
//! Each ABI names an INI section whose options are layered on top of the
//! global `all` section.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// A build target recognised by `--abi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum Abi {
    #[value(name = "x86")]
    #[serde(rename = "x86")]
    X86,
    #[value(name = "x86_64")]
    #[serde(rename = "x86_64")]
    X86_64,
    #[value(name = "arm")]
    #[serde(rename = "arm")]
    Arm,
    #[value(name = "arm64")]
    #[serde(rename = "arm64")]
    Arm64,
    #[value(name = "macosx")]
    #[serde(rename = "macosx")]
    MacOsX,
}

impl Abi {
    /// The identifier as written on the command line and as an INI section name.
    pub fn as_str(self) -> &'static str {
        match self {
            Abi::X86 => "x86",
            Abi::X86_64 => "x86_64",
            Abi::Arm => "arm",
            Abi::Arm64 => "arm64",
            Abi::MacOsX => "macosx",
        }
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
