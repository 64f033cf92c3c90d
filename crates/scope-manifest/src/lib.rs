mod discovery;
mod error;
mod format;
mod kind;
mod manifest;

pub use discovery::find_nearest_manifest;
pub use error::ManifestError;
pub use kind::ManifestKind;
pub use manifest::{DependencySet, PackageManifest, read_manifest};

pub type Result<T> = std::result::Result<T, ManifestError>;
