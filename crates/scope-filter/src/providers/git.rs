use std::path::{Path, PathBuf};

use scope_git::Repository;

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        Ok(scope_git::repository_root(start_path)?)
    }

    fn commit_files(&self, repository_root: &Path, hash: &str) -> Result<Vec<String>> {
        let repo = Repository::open(repository_root)?;
        Ok(repo.commit_files(hash)?)
    }
}
