use std::path::{Path, PathBuf};
use std::sync::Arc;

use scope_core::{PackagePath, normalize_segments};
use scope_manifest::PackageManifest;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::cache::MemoCache;
use crate::traits::{GitProvider, ManifestProvider};
use crate::{FilterError, Result};

/// Where the target package sits inside its repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    pub repository_root: PathBuf,
    pub package_dir: PathBuf,
    pub package_path: PackagePath,
    pub manifest_path: Option<PathBuf>,
}

/// Resolves the package containing `start_dir`.
///
/// The package directory is the directory of the nearest manifest at or above
/// `start_dir` within the repository. Without such a manifest `start_dir`
/// itself is treated as the package directory.
///
/// # Errors
///
/// Returns an error if `start_dir` is not inside a git repository or the
/// package directory is not inside the repository root.
pub fn locate_package<G, M>(git: &G, manifests: &M, start_dir: &Path) -> Result<PackageLocation>
where
    G: GitProvider + ?Sized,
    M: ManifestProvider + ?Sized,
{
    let start_dir = resolve(start_dir);
    let repository_root = resolve(&git.repository_root(&start_dir)?);

    let manifest_path = manifests.find_nearest(&start_dir, Some(&repository_root));
    let package_dir = manifest_path
        .as_deref()
        .and_then(Path::parent)
        .map_or_else(|| start_dir.clone(), Path::to_path_buf);

    let relative = package_dir.strip_prefix(&repository_root).map_err(|_| {
        FilterError::PackageOutsideRepository {
            package_dir: package_dir.clone(),
            root: repository_root.clone(),
        }
    })?;
    let package_path = PackagePath::from_relative(relative);

    debug!(
        root = %repository_root.display(),
        package = %package_path,
        "located package"
    );

    Ok(PackageLocation {
        repository_root,
        package_dir,
        package_path,
        manifest_path,
    })
}

/// Reads the manifest of the package a repository-relative file belongs to.
///
/// Returns `None` when no manifest encloses the file below the repository root
/// or when the enclosing manifest cannot be read or parsed.
pub fn locate_owner_package<M>(
    manifests: &M,
    repository_root: &Path,
    file: &str,
) -> Option<PackageManifest>
where
    M: ManifestProvider + ?Sized,
{
    let dir = file_directory(repository_root, file)?;
    read_nearest_manifest(manifests, &dir, repository_root)
}

pub(crate) fn read_nearest_manifest<M>(
    manifests: &M,
    start_dir: &Path,
    repository_root: &Path,
) -> Option<PackageManifest>
where
    M: ManifestProvider + ?Sized,
{
    let manifest_path = manifests.find_nearest(start_dir, Some(repository_root))?;

    match manifests.read(&manifest_path) {
        Ok(manifest) => Some(manifest),
        Err(FilterError::Manifest(scope_manifest::ManifestError::Read { path, source })) => {
            warn!(manifest = %path.display(), error = %source, "skipping unreadable manifest");
            None
        }
        Err(err) => {
            debug!(manifest = %manifest_path.display(), error = %err, "skipping invalid manifest");
            None
        }
    }
}

/// Absolute directory of a repository-relative file, or `None` if the path
/// escapes the repository.
fn file_directory(repository_root: &Path, file: &str) -> Option<PathBuf> {
    let mut segments = normalize_segments(file);
    if segments.first().is_some_and(|first| first == "..") {
        return None;
    }
    segments.pop();

    Some(segments.iter().fold(repository_root.to_path_buf(), |dir, segment| dir.join(segment)))
}

// Paths that do not exist on disk are compared as given.
fn resolve(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Run-scoped owner lookup that caches results per directory and bounds the
/// number of manifest reads in flight.
pub struct OwnerResolver<M> {
    manifests: Arc<M>,
    repository_root: PathBuf,
    limiter: Arc<Semaphore>,
    cache: MemoCache<PathBuf, Option<Arc<PackageManifest>>>,
}

impl<M> OwnerResolver<M>
where
    M: ManifestProvider + 'static,
{
    pub fn new(manifests: Arc<M>, repository_root: PathBuf, limiter: Arc<Semaphore>) -> Self {
        Self {
            manifests,
            repository_root,
            limiter,
            cache: MemoCache::new(),
        }
    }

    /// # Errors
    ///
    /// Returns an error only if the lookup task could not be run; manifest
    /// problems resolve to `None`.
    pub async fn owner_of(&self, file: &str) -> Result<Option<Arc<PackageManifest>>> {
        let Some(dir) = file_directory(&self.repository_root, file) else {
            return Ok(None);
        };

        self.cache
            .get_or_try_init(dir.clone(), || async move {
                let _permit = self.limiter.acquire().await?;
                let manifests = Arc::clone(&self.manifests);
                let root = self.repository_root.clone();

                let owner = tokio::task::spawn_blocking(move || {
                    read_nearest_manifest(manifests.as_ref(), &dir, &root)
                })
                .await?;

                Ok::<_, FilterError>(owner.map(Arc::new))
            })
            .await
    }
}
