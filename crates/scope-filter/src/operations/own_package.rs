use scope_core::{EnrichedCommit, PackagePath};
use tracing::debug;

/// Keeps commits that touch at least one file inside the package directory.
pub struct OwnPackageFilter {
    package_path: PackagePath,
}

impl OwnPackageFilter {
    #[must_use]
    pub fn new(package_path: PackagePath) -> Self {
        Self { package_path }
    }

    /// First file of `commit` that lies inside the package, if any.
    #[must_use]
    pub fn matching_file<'a>(&self, commit: &'a EnrichedCommit) -> Option<&'a str> {
        commit
            .files
            .iter()
            .map(String::as_str)
            .find(|file| self.package_path.contains(file))
    }

    #[must_use]
    pub fn filter(&self, commits: &[EnrichedCommit]) -> Vec<EnrichedCommit> {
        commits
            .iter()
            .filter(|commit| match self.matching_file(commit) {
                Some(file) => {
                    debug!(
                        commit = commit.hash(),
                        file,
                        package = %self.package_path,
                        "commit touches package"
                    );
                    true
                }
                None => false,
            })
            .cloned()
            .collect()
    }
}
