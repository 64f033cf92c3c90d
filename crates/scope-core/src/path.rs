use std::fmt;
use std::path::{Component, Path, PathBuf};

pub trait StartPathProvider: Send + Sync {
    fn start_path(&self) -> std::io::Result<PathBuf>;
}

#[derive(Default, Clone)]
pub struct CurrentDirProvider;

impl StartPathProvider for CurrentDirProvider {
    fn start_path(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

#[derive(Clone)]
pub struct FixedPathProvider(PathBuf);

impl FixedPathProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl StartPathProvider for FixedPathProvider {
    fn start_path(&self) -> std::io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}

/// A package directory relative to the repository root, as path segments.
///
/// Containment is decided segment by segment, so `pkg` never contains
/// `pkg-other/file`. The empty path is the repository root and contains
/// every file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PackagePath {
    segments: Vec<String>,
}

impl PackagePath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_relative(path: &Path) -> Self {
        let mut segments: Vec<String> = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => push_parent(&mut segments),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether a repository-relative file path lies at or under this package.
    #[must_use]
    pub fn contains(&self, file: &str) -> bool {
        let file_segments = normalize_segments(file);

        self.segments.len() <= file_segments.len()
            && self
                .segments
                .iter()
                .zip(&file_segments)
                .all(|(package, file)| package == file)
    }
}

impl fmt::Display for PackagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}

/// Splits a git-style path into lexically normalized segments.
#[must_use]
pub fn normalize_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for part in path.split(['/', std::path::MAIN_SEPARATOR]) {
        match part {
            "" | "." => {}
            ".." => push_parent(&mut segments),
            other => segments.push(other.to_string()),
        }
    }

    segments
}

fn push_parent(segments: &mut Vec<String>) {
    match segments.last().map(String::as_str) {
        Some("..") | None => segments.push("..".to_string()),
        Some(_) => {
            segments.pop();
        }
    }
}
