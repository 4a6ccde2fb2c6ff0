//! Absolute, lexically normalised paths.

use crate::error::{Result, XpatchError};
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current directory and fold `.` and `..`
/// components. Symlinks are not resolved.
pub fn absolute_normalized<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(XpatchError::ArgumentError("path must not be empty".to_string()));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| {
            XpatchError::IoError(format!("failed to determine current directory: {}", e))
        })?;
        cwd.join(path)
    };

    Ok(normalize_lexically(&absolute))
}

/// Fold `.` and `..` without touching the filesystem. `..` at the root stays
/// at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
