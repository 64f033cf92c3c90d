use std::path::{Path, PathBuf};

use scope_manifest::PackageManifest;

use crate::Result;

pub trait ManifestProvider: Send + Sync {
    /// Nearest manifest at or above `start_dir`, not looking past `boundary`.
    fn find_nearest(&self, start_dir: &Path, boundary: Option<&Path>) -> Option<PathBuf>;

    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    fn read(&self, manifest_path: &Path) -> Result<PackageManifest>;
}
