use futures::future::try_join_all;
use scope_core::EnrichedCommit;
use scope_manifest::DependencySet;
use tracing::debug;

use super::locate::OwnerResolver;
use crate::Result;
use crate::traits::ManifestProvider;

/// Keeps commits that touch a package the target package depends on directly.
pub struct DependencyImpactFilter<'a, M> {
    dependencies: Option<DependencySet>,
    owners: &'a OwnerResolver<M>,
}

impl<'a, M> DependencyImpactFilter<'a, M>
where
    M: ManifestProvider + 'static,
{
    /// `dependencies` is `None` when the target package has no readable
    /// manifest, in which case nothing qualifies.
    pub fn new(dependencies: Option<DependencySet>, owners: &'a OwnerResolver<M>) -> Self {
        Self {
            dependencies,
            owners,
        }
    }

    /// # Errors
    ///
    /// Returns an error only if an owner lookup could not be run.
    pub async fn filter(&self, commits: &[EnrichedCommit]) -> Result<Vec<EnrichedCommit>> {
        let Some(dependencies) = &self.dependencies else {
            debug!("target package has no manifest, no dependency commits");
            return Ok(Vec::new());
        };
        if dependencies.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            dependencies = dependencies.len(),
            commits = commits.len(),
            "checking commits against direct dependencies"
        );

        let verdicts = try_join_all(
            commits
                .iter()
                .map(|commit| self.touched_dependency(commit, dependencies)),
        )
        .await?;

        Ok(commits
            .iter()
            .zip(verdicts)
            .filter_map(|(commit, dependency)| dependency.map(|_| commit.clone()))
            .collect())
    }

    /// Name of the first dependency whose files `commit` touches.
    async fn touched_dependency(
        &self,
        commit: &EnrichedCommit,
        dependencies: &DependencySet,
    ) -> Result<Option<String>> {
        for file in &commit.files {
            let Some(owner) = self.owners.owner_of(file).await? else {
                continue;
            };
            let Some(name) = owner.name.as_deref() else {
                continue;
            };
            if dependencies.contains(name) {
                debug!(
                    commit = commit.hash(),
                    file = file.as_str(),
                    dependency = name,
                    "commit touches dependency"
                );
                return Ok(Some(name.to_string()));
            }
        }
        Ok(None)
    }
}
