//! Project-root discovery.
//!
//! The starting directory counts as the root if it has a `public/` folder.
//! Each ancestor counts if it has a `public/` folder or a `package.json` file.
//! Without a match the starting directory is used.

use std::path::{Path, PathBuf};

/// Folder marking a project root.
pub const PUBLIC_DIR: &str = "public";
/// Manifest file marking a project root (ancestors only).
pub const MANIFEST_FILE: &str = "package.json";

/// Filesystem queries needed by the root search.
pub trait FsProbe {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
}

/// [`FsProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FsProbe for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Returns the first directory from `start` upwards that looks like a project root.
pub fn find_project_root(start: &Path, fs: &dyn FsProbe) -> PathBuf {
    if fs.is_dir(&start.join(PUBLIC_DIR)) {
        return start.to_path_buf();
    }

    for ancestor in start.ancestors().skip(1) {
        if fs.is_dir(&ancestor.join(PUBLIC_DIR)) || fs.is_file(&ancestor.join(MANIFEST_FILE)) {
            tracing::debug!(root = %ancestor.display(), "project root found above cwd");
            return ancestor.to_path_buf();
        }
    }

    tracing::debug!(root = %start.display(), "no project marker found; using start dir");
    start.to_path_buf()
}

/// [`find_project_root`] from the current working directory.
pub fn discover() -> std::io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(find_project_root(&cwd, &LocalFs))
}
