use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which relevance rules decide whether a commit belongs to a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Commits touching the package or one of its dependencies
    #[default]
    Both,
    /// Commits touching files inside the package directory
    Own,
    /// Commits touching packages the package depends on
    Dependents,
}

impl FilterMode {
    #[must_use]
    pub fn includes_own(self) -> bool {
        matches!(self, Self::Both | Self::Own)
    }

    #[must_use]
    pub fn includes_dependents(self) -> bool {
        matches!(self, Self::Both | Self::Dependents)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Both => "both",
            Self::Own => "own",
            Self::Dependents => "dependents",
        };
        write!(f, "{s}")
    }
}

/// A commit as supplied by the release host.
///
/// Any fields besides `hash` and `subject` are carried through untouched so the
/// host gets back the same record it handed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    #[serde(default)]
    pub subject: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Commit {
    #[must_use]
    pub fn new(hash: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            metadata: Map::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Attaches `files`, replacing any `files` field the host already supplied.
    #[must_use]
    pub fn with_files(mut self, files: Vec<String>) -> EnrichedCommit {
        self.metadata.remove("files");
        EnrichedCommit {
            commit: self,
            files,
        }
    }
}

/// A commit together with the repository-relative paths it touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCommit {
    #[serde(flatten)]
    pub commit: Commit,
    pub files: Vec<String>,
}

impl EnrichedCommit {
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.commit.hash
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.commit.subject
    }
}
