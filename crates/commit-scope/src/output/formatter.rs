use std::path::PathBuf;

use scope_filter::operations::{FilterOutcome, PackageLocation};
use scope_manifest::PackageManifest;
use serde::Serialize;

use crate::error::Result;

/// The resolved target package, as reported by `locate`.
#[derive(Debug, Serialize)]
pub(crate) struct LocationReport {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) path: String,
    pub(crate) manifest: Option<PathBuf>,
    pub(crate) repository_root: PathBuf,
}

impl LocationReport {
    pub(crate) fn new(location: PackageLocation, manifest: Option<PackageManifest>) -> Self {
        let (name, version) = manifest.map_or((None, None), |m| (m.name, m.version));
        Self {
            name,
            version,
            path: location.package_path.to_string(),
            manifest: location.manifest_path,
            repository_root: location.repository_root,
        }
    }
}

pub(crate) trait OutputFormatter {
    /// # Errors
    ///
    /// Returns an error if the outcome cannot be rendered.
    fn format_outcome(&self, outcome: &FilterOutcome) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the report cannot be rendered.
    fn format_location(&self, report: &LocationReport) -> Result<String>;
}
