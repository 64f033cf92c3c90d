use std::sync::Arc;

use scope_core::{Commit, EnrichedCommit, FilterMode, PackagePath, StartPathProvider};
use scope_manifest::PackageManifest;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use super::combine::combine;
use super::dependents::DependencyImpactFilter;
use super::enrich::CommitFileEnricher;
use super::locate::{OwnerResolver, PackageLocation, locate_package};
use super::own_package::OwnPackageFilter;
use crate::config::FilterConfig;
use crate::traits::{GitProvider, ManifestProvider};
use crate::{FilterError, Result};

/// Result of one filtering run.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub package_name: Option<String>,
    pub package_path: PackagePath,
    pub commits: Vec<EnrichedCommit>,
}

impl FilterOutcome {
    /// Package name if declared, otherwise its repository-relative path.
    #[must_use]
    pub fn package_label(&self) -> String {
        self.package_name
            .clone()
            .unwrap_or_else(|| self.package_path.to_string())
    }
}

/// Selects the commits relevant to the package containing the start directory.
pub struct RelevantCommitsOperation<G, M, S> {
    git: Arc<G>,
    manifests: Arc<M>,
    start_path_provider: S,
    config: FilterConfig,
}

impl<G, M, S> RelevantCommitsOperation<G, M, S>
where
    G: GitProvider + 'static,
    M: ManifestProvider + 'static,
    S: StartPathProvider,
{
    pub fn new(git: G, manifests: M, start_path_provider: S, config: FilterConfig) -> Self {
        Self {
            git: Arc::new(git),
            manifests: Arc::new(manifests),
            start_path_provider,
            config,
        }
    }

    /// Resolves the target package without filtering anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the start directory cannot be determined or is not
    /// inside a git repository.
    pub fn locate(&self) -> Result<(PackageLocation, Option<PackageManifest>)> {
        let start_dir = self
            .start_path_provider
            .start_path()
            .map_err(FilterError::StartPath)?;
        let location = locate_package(self.git.as_ref(), self.manifests.as_ref(), &start_dir)?;
        let manifest = self.read_target_manifest(&location);
        Ok((location, manifest))
    }

    /// Enriches `commits` once and keeps those selected by `mode`, own-package
    /// matches first, each group in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if the package cannot be located or any commit's file
    /// lookup fails.
    pub async fn execute(&self, commits: &[Commit], mode: FilterMode) -> Result<FilterOutcome> {
        let (location, target) = self.locate()?;

        let limiter = Arc::new(Semaphore::new(self.config.max_concurrency().get()));
        let enricher = CommitFileEnricher::new(
            Arc::clone(&self.git),
            location.repository_root.clone(),
            Arc::clone(&limiter),
        );
        let enriched = enricher.enrich(commits).await?;

        let owners = OwnerResolver::new(
            Arc::clone(&self.manifests),
            location.repository_root.clone(),
            limiter,
        );
        let own_filter = OwnPackageFilter::new(location.package_path.clone());
        let dependency_filter = DependencyImpactFilter::new(
            target.as_ref().map(PackageManifest::dependency_set),
            &owners,
        );

        let (own, dependents) = tokio::try_join!(
            async {
                Ok::<_, FilterError>(if mode.includes_own() {
                    own_filter.filter(&enriched)
                } else {
                    Vec::new()
                })
            },
            async {
                if mode.includes_dependents() {
                    dependency_filter.filter(&enriched).await
                } else {
                    Ok(Vec::new())
                }
            },
        )?;

        let outcome = FilterOutcome {
            package_name: target.and_then(|manifest| manifest.name),
            package_path: location.package_path,
            commits: combine(own, dependents),
        };

        info!(
            mode = %mode,
            "found {} commits for package {}",
            outcome.commits.len(),
            outcome.package_label()
        );

        Ok(outcome)
    }

    fn read_target_manifest(&self, location: &PackageLocation) -> Option<PackageManifest> {
        let path = location.manifest_path.as_deref()?;
        match self.manifests.read(path) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                warn!(manifest = %path.display(), error = %err, "cannot read package manifest");
                None
            }
        }
    }
}
