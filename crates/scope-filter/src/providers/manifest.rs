use std::path::{Path, PathBuf};

use scope_manifest::{ManifestKind, PackageManifest, find_nearest_manifest, read_manifest};

use crate::Result;
use crate::traits::ManifestProvider;

pub struct FileSystemManifestProvider {
    kind: ManifestKind,
}

impl FileSystemManifestProvider {
    #[must_use]
    pub fn new(kind: ManifestKind) -> Self {
        Self { kind }
    }
}

impl Default for FileSystemManifestProvider {
    fn default() -> Self {
        Self::new(ManifestKind::default())
    }
}

impl ManifestProvider for FileSystemManifestProvider {
    fn find_nearest(&self, start_dir: &Path, boundary: Option<&Path>) -> Option<PathBuf> {
        find_nearest_manifest(start_dir, boundary, self.kind)
    }

    fn read(&self, manifest_path: &Path) -> Result<PackageManifest> {
        Ok(read_manifest(manifest_path, self.kind)?)
    }
}
