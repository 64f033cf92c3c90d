use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use indexmap::IndexMap;
use scope_core::{Commit, EnrichedCommit};
use scope_git::GitError;
use scope_manifest::{ManifestError, ManifestKind, PackageManifest};

use crate::traits::{GitProvider, ManifestProvider};
use crate::{FilterError, Result};

pub(crate) const MOCK_ROOT: &str = "/mock/repo";

pub(crate) fn make_commit(hash: &str) -> Commit {
    Commit::new(hash, format!("commit {hash}"))
}

pub(crate) fn make_enriched(hash: &str, files: &[&str]) -> EnrichedCommit {
    make_commit(hash).with_files(files.iter().map(ToString::to_string).collect())
}

pub(crate) fn hashes(commits: &[EnrichedCommit]) -> Vec<&str> {
    commits.iter().map(EnrichedCommit::hash).collect()
}

pub(crate) struct MockGitProvider {
    root: PathBuf,
    commits: HashMap<String, Vec<String>>,
    delay: Option<Duration>,
    lookups: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockGitProvider {
    pub(crate) fn new() -> Self {
        Self {
            root: PathBuf::from(MOCK_ROOT),
            commits: HashMap::new(),
            delay: None,
            lookups: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_commit(mut self, hash: &str, files: &[&str]) -> Self {
        self.commits.insert(
            hash.to_string(),
            files.iter().map(ToString::to_string).collect(),
        );
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookups mutex poisoned").clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl GitProvider for MockGitProvider {
    fn repository_root(&self, _start_path: &Path) -> Result<PathBuf> {
        Ok(self.root.clone())
    }

    fn commit_files(&self, repository_root: &Path, hash: &str) -> Result<Vec<String>> {
        assert_eq!(repository_root, self.root);
        self.lookups
            .lock()
            .expect("lookups mutex poisoned")
            .push(hash.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.commits
            .get(hash)
            .cloned()
            .ok_or_else(|| {
                FilterError::Git(GitError::CommitNotFound {
                    hash: hash.to_string(),
                })
            })
    }
}

enum MockManifest {
    Valid(PackageManifest),
    Malformed,
}

pub(crate) struct MockManifestProvider {
    manifests: HashMap<PathBuf, MockManifest>,
    reads: AtomicUsize,
}

impl MockManifestProvider {
    pub(crate) fn new() -> Self {
        Self {
            manifests: HashMap::new(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Registers a `package.json` in `dir` (relative to the mock root).
    pub(crate) fn with_package(mut self, dir: &str, name: &str, dependencies: &[&str]) -> Self {
        let path = manifest_path(dir);
        let manifest = PackageManifest {
            path: path.clone(),
            kind: ManifestKind::Npm,
            name: Some(name.to_string()),
            version: Some("1.0.0".to_string()),
            dependencies: dependency_map(dependencies),
            dev_dependencies: dependency_map(&[]),
            peer_dependencies: dependency_map(&[]),
        };
        self.manifests.insert(path, MockManifest::Valid(manifest));
        self
    }

    pub(crate) fn with_manifest(mut self, manifest: PackageManifest) -> Self {
        self.manifests
            .insert(manifest.path.clone(), MockManifest::Valid(manifest));
        self
    }

    pub(crate) fn with_malformed(mut self, dir: &str) -> Self {
        self.manifests
            .insert(manifest_path(dir), MockManifest::Malformed);
        self
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

pub(crate) fn manifest_path(dir: &str) -> PathBuf {
    let root = PathBuf::from(MOCK_ROOT);
    let dir = if dir.is_empty() { root } else { root.join(dir) };
    dir.join("package.json")
}

impl ManifestProvider for MockManifestProvider {
    fn find_nearest(&self, start_dir: &Path, boundary: Option<&Path>) -> Option<PathBuf> {
        let mut current = Some(start_dir);
        while let Some(dir) = current {
            let candidate = dir.join("package.json");
            if self.manifests.contains_key(&candidate) {
                return Some(candidate);
            }
            if boundary.is_some_and(|boundary| dir == boundary) {
                break;
            }
            current = dir.parent();
        }
        None
    }

    fn read(&self, manifest_path: &Path) -> Result<PackageManifest> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.manifests.get(manifest_path) {
            Some(MockManifest::Valid(manifest)) => Ok(manifest.clone()),
            Some(MockManifest::Malformed) => Err(ManifestError::JsonParse {
                path: manifest_path.to_path_buf(),
                source: serde_json::from_str::<serde_json::Value>("{")
                    .expect_err("truncated json must fail"),
            }
            .into()),
            None => Err(ManifestError::Read {
                path: manifest_path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into()),
        }
    }
}

fn dependency_map(names: &[&str]) -> IndexMap<String, String> {
    names
        .iter()
        .map(|name| ((*name).to_string(), "*".to_string()))
        .collect()
}
