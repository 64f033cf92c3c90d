use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Repository-relative paths touched by a single commit.
    ///
    /// Mirrors `git diff-tree --root -r --name-only`: a root commit lists every
    /// file it introduces, a merge commit lists nothing, and a rename shows up
    /// as the removed path plus the added path.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommitNotFound`] if the hash cannot be resolved.
    pub fn commit_files(&self, hash: &str) -> Result<Vec<String>> {
        let commit = self.find_commit(hash)?;

        let parent_tree = match commit.parent_count() {
            0 => None,
            1 => Some(commit.parent(0)?.tree()?),
            _ => return Ok(Vec::new()),
        };
        let tree = commit.tree()?;

        let diff = self
            .inner
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut files = Vec::new();

        for delta in diff.deltas() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .ok_or(GitError::MissingDeltaPath)?;

            files.push(path.to_string_lossy().into_owned());
        }

        Ok(files)
    }
}
