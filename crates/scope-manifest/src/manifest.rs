use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::ManifestError;
use crate::format::{CargoManifest, ManifestFields, NpmManifest};
use crate::kind::ManifestKind;

/// A parsed package manifest.
///
/// This is a data transfer object with intentionally public fields for direct access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub path: PathBuf,
    pub kind: ManifestKind,
    pub name: Option<String>,
    pub version: Option<String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub peer_dependencies: IndexMap<String, String>,
}

impl PackageManifest {
    /// Runtime, development and peer dependencies merged into one set.
    ///
    /// Later declarations overwrite the range of earlier ones for the same name.
    #[must_use]
    pub fn dependency_set(&self) -> DependencySet {
        let mut merged = self.dependencies.clone();
        for (name, range) in self.dev_dependencies.iter().chain(&self.peer_dependencies) {
            merged.insert(name.clone(), range.clone());
        }
        DependencySet(merged)
    }
}

/// Dependency names of a package mapped to their declared version ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(IndexMap<String, String>);

impl DependencySet {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for DependencySet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// # Errors
///
/// Returns `ManifestError::Read` if the file cannot be read, or a parse error
/// if its content is not a valid manifest of the given kind.
pub fn read_manifest(path: &Path, kind: ManifestKind) -> Result<PackageManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let fields: ManifestFields = match kind {
        ManifestKind::Npm => serde_json::from_str::<NpmManifest>(&content)
            .map_err(|source| ManifestError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
            .into(),
        ManifestKind::Cargo => toml::from_str::<CargoManifest>(&content)
            .map_err(|source| ManifestError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?
            .into(),
    };

    Ok(PackageManifest {
        path: path.to_path_buf(),
        kind,
        name: fields.name,
        version: fields.version,
        dependencies: fields.dependencies,
        dev_dependencies: fields.dev_dependencies,
        peer_dependencies: fields.peer_dependencies,
    })
}
