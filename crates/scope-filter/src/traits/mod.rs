mod git_provider;
mod manifest_provider;

pub use git_provider::GitProvider;
pub use manifest_provider::ManifestProvider;
