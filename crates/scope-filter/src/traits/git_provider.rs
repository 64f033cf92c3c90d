use std::path::{Path, PathBuf};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if `start_path` is not inside a git working tree.
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf>;

    /// Repository-relative paths touched by the commit `hash`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the commit
    /// cannot be found.
    fn commit_files(&self, repository_root: &Path, hash: &str) -> Result<Vec<String>>;
}
