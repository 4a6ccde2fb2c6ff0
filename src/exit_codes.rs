//! Exit code constants for the xpatch CLI.
//!
//! - 0: Success
//! - 1: Argument error (bad flag value, empty path)
//! - 2: Usage error reported by clap itself (missing flag, unknown ABI)
//! - 3: Configuration error (malformed INI, missing section or option)
//! - 4: I/O failure (input unreadable, output unwritable)
//! - 5: Encoding failure (non-ASCII output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Argument error: a flag was accepted by the parser but its value is unusable.
pub const USER_ERROR: i32 = 1;

/// Usage error: clap exits with this code when argument parsing fails.
#[allow(dead_code)]
pub const USAGE_ERROR: i32 = 2;

/// Configuration error: the INI file is malformed or lacks a required option.
pub const CONFIG_FAILURE: i32 = 3;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 4;

/// Encoding failure: the patched content is not 7-bit ASCII.
pub const ENCODING_FAILURE: i32 = 5;
