use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A scratch directory holding a config and an input header.
pub(crate) struct Workspace {
    pub(crate) dir: TempDir,
    pub(crate) config: PathBuf,
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
}

pub(crate) fn create_workspace(config: &str, input: &str) -> Workspace {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("xpatch.ini");
    let input_path = dir.path().join("config.h.in");
    let output_path = dir.path().join("config.h");

    std::fs::write(&config_path, config).unwrap();
    std::fs::write(&input_path, input).unwrap();

    Workspace {
        dir,
        config: config_path,
        input: input_path,
        output: output_path,
    }
}
