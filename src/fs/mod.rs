//! Filesystem utilities for xpatch.
//!
//! Path normalisation for the command-line paths and atomic writes so the
//! generated file is either complete or untouched.

pub mod atomic;
mod paths;

pub use atomic::atomic_write;
pub use paths::absolute_normalized;
