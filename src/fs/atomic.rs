//! Atomic file replacement for the generated output.
//!
//! A patch run must never leave a half-written header behind, so output is
//! written like this:
//! 1. Write the content to a temporary file in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! `rename()` replaces an existing target atomically on POSIX as long as both
//! paths are on the same filesystem, which holds because the temporary file
//! lives next to the target. On Windows `std::fs::rename` maps to
//! `MoveFileExW` with `MOVEFILE_REPLACE_EXISTING`.
//!
//! The parent directory is not created: an output path in a missing directory
//! is an error, like any other unwritable path.

use crate::error::{Result, XpatchError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(XpatchError::IoError)` - Create, write, sync or rename failed; the
///   target is untouched and the temporary file is removed
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content)?;
    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            XpatchError::IoError(format!("invalid output path '{}'", target.display()))
        })?;

    // The pid keeps concurrent builds writing the same header apart.
    let temp_name = format!(".{}.{}.tmp", filename, std::process::id());
    Ok(parent.join(temp_name))
}

/// Write content to a file and sync to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        XpatchError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        XpatchError::IoError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        XpatchError::IoError(format!(
            "failed to sync temporary file '{}' to disk: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Rename `source` over `target`.
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        XpatchError::IoError(format!(
            "failed to write output file '{}': {}",
            target.display(),
            e
        ))
    })?;

    sync_parent_dir(target);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_target: &Path) {}
