//! Output line buffer with a bounded lookback for discards.

use crate::classify::is_one_line_comment;

/// Lines emitted so far, in order.
///
/// Lines are only ever appended, except by `retract_comment`, which may take
/// back at most the last two.
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Takes back a trailing one-line comment that explains a discarded
    /// marker, together with a blank line directly above it.
    ///
    /// Returns the removed comment. The blank line is not reported.
    pub(crate) fn retract_comment(&mut self) -> Option<String> {
        if !self.lines.last().is_some_and(|last| is_one_line_comment(last)) {
            return None;
        }
        let comment = self.lines.pop()?;
        if self.lines.last().is_some_and(|above| above.trim().is_empty()) {
            self.lines.pop();
        }
        Some(comment)
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
