mod git;
mod manifest;

pub use git::Git2Provider;
pub use manifest::FileSystemManifestProvider;
