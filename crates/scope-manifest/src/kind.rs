use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ManifestKind {
    /// npm `package.json`
    #[default]
    Npm,
    /// Cargo `Cargo.toml`
    Cargo,
}

impl ManifestKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Npm => "package.json",
            Self::Cargo => "Cargo.toml",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}
