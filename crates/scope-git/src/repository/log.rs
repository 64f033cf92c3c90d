use crate::{CommitInfo, GitError, Result};

use super::Repository;
use super::commit::commit_info;

impl Repository {
    /// Commits reachable from `head` but not from `since`, newest first.
    ///
    /// Without `since` the whole history reachable from `head` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either reference cannot be resolved.
    pub fn commits_between(&self, since: Option<&str>, head: &str) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        revwalk.push(self.resolve_oid(head)?)?;
        if let Some(since) = since {
            revwalk.hide(self.resolve_oid(since)?)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            commits.push(commit_info(&commit));
        }

        Ok(commits)
    }

    fn resolve_oid(&self, refspec: &str) -> Result<git2::Oid> {
        self.inner
            .revparse_single(refspec)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })
    }
}
