//! Serialisation of patched lines to 7-bit output bytes.

use crate::error::{Result, XpatchError};

/// Join `lines` with a trailing `\n` each, rejecting any non-ASCII character.
///
/// The error names the 1-based output line and the offending code point.
pub fn encode_ascii(lines: &[String]) -> Result<Vec<u8>> {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut bytes = Vec::with_capacity(capacity);

    for (idx, line) in lines.iter().enumerate() {
        if let Some(ch) = line.chars().find(|ch| !ch.is_ascii()) {
            return Err(XpatchError::EncodingError(format!(
                "output line {} contains '{}' (U+{:04X}), which is outside the 7-bit ASCII range",
                idx + 1,
                ch,
                ch as u32
            )));
        }
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
    }

    Ok(bytes)
}
