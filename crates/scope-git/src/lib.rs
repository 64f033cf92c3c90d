mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::CommitInfo;

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns [`GitError::NotARepository`] if the path is not inside a git working tree.
pub fn repository_root(path: &Path) -> Result<PathBuf> {
    Ok(Repository::open(path)?.root().to_path_buf())
}

/// # Errors
///
/// Returns an error if the path is not a git repository, or
/// [`GitError::CommitNotFound`] if the hash cannot be resolved.
pub fn commit_files(path: &Path, hash: &str) -> Result<Vec<String>> {
    Repository::open(path)?.commit_files(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::{commit_file, setup_test_repo};

    #[test]
    fn repository_root_from_subdirectory() -> anyhow::Result<()> {
        let (dir, _repo) = setup_test_repo()?;
        let nested = dir.path().join("packages/module1");
        std::fs::create_dir_all(&nested)?;

        let root = repository_root(&nested)?;

        assert_eq!(root.canonicalize()?, dir.path().canonicalize()?);
        Ok(())
    }

    #[test]
    fn repository_root_outside_repository_fails() {
        let dir = tempfile::TempDir::new().expect("failed to create temp dir");

        let result = repository_root(dir.path());

        assert!(matches!(result, Err(GitError::NotARepository { .. })));
    }

    #[test]
    fn commit_files_via_public_fn() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        let info = commit_file(&repo, "module1/readme.md", "hello", "add readme")?;

        let files = commit_files(dir.path(), &info.sha)?;

        assert_eq!(files, vec!["module1/readme.md"]);
        Ok(())
    }
}
