use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

pub(crate) type DependencyMap = IndexMap<String, String>;

/// The fields of a manifest that matter for commit attribution, independent
/// of the on-disk format.
#[derive(Debug, Default)]
pub(crate) struct ManifestFields {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) dependencies: DependencyMap,
    pub(crate) dev_dependencies: DependencyMap,
    pub(crate) peer_dependencies: DependencyMap,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NpmManifest {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    // npm accepts `null` for a dependency section and treats it as empty
    #[serde(default)]
    pub(crate) dependencies: Option<IndexMap<String, Value>>,
    #[serde(default)]
    pub(crate) dev_dependencies: Option<IndexMap<String, Value>>,
    #[serde(default)]
    pub(crate) peer_dependencies: Option<IndexMap<String, Value>>,
}

impl From<NpmManifest> for ManifestFields {
    fn from(manifest: NpmManifest) -> Self {
        Self {
            name: manifest.name,
            version: manifest.version,
            dependencies: npm_ranges(manifest.dependencies),
            dev_dependencies: npm_ranges(manifest.dev_dependencies),
            peer_dependencies: npm_ranges(manifest.peer_dependencies),
        }
    }
}

fn npm_ranges(raw: Option<IndexMap<String, Value>>) -> DependencyMap {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, range)| {
            let range = match range {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, range)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct CargoManifest {
    pub(crate) package: Option<CargoPackage>,
    #[serde(default)]
    pub(crate) dependencies: IndexMap<String, CargoDependency>,
    #[serde(default, rename = "dev-dependencies")]
    pub(crate) dev_dependencies: IndexMap<String, CargoDependency>,
    #[serde(default, rename = "build-dependencies")]
    pub(crate) build_dependencies: IndexMap<String, CargoDependency>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CargoPackage {
    pub(crate) name: String,
    pub(crate) version: Option<VersionField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum VersionField {
    Literal(String),
    Inherited(toml::Table),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CargoDependency {
    Version(String),
    Detailed(DetailedDependency),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetailedDependency {
    pub(crate) version: Option<String>,
    pub(crate) package: Option<String>,
}

impl From<CargoManifest> for ManifestFields {
    fn from(manifest: CargoManifest) -> Self {
        let (name, version) = match manifest.package {
            Some(package) => {
                let version = match package.version {
                    Some(VersionField::Literal(v)) => Some(v),
                    Some(VersionField::Inherited(_)) | None => None,
                };
                (Some(package.name), version)
            }
            None => (None, None),
        };

        Self {
            name,
            version,
            dependencies: cargo_requirements(manifest.dependencies),
            dev_dependencies: cargo_requirements(manifest.dev_dependencies),
            // Cargo has no peer dependencies; build dependencies fill the same
            // "needed alongside" role for attribution purposes.
            peer_dependencies: cargo_requirements(manifest.build_dependencies),
        }
    }
}

fn cargo_requirements(raw: IndexMap<String, CargoDependency>) -> DependencyMap {
    raw.into_iter()
        .map(|(key, dependency)| match dependency {
            CargoDependency::Version(requirement) => (key, requirement),
            CargoDependency::Detailed(detailed) => (
                detailed.package.unwrap_or(key),
                detailed.version.unwrap_or_else(|| "*".to_string()),
            ),
        })
        .collect()
}
