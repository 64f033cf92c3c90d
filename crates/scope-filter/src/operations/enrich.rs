use std::path::PathBuf;
use std::sync::Arc;

use futures::future::try_join_all;
use scope_core::{Commit, EnrichedCommit};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::cache::MemoCache;
use crate::traits::GitProvider;
use crate::{FilterError, Result};

/// Attaches the touched file list to each commit.
///
/// Lookups run concurrently, bounded by the shared limiter, and each distinct
/// hash is looked up at most once per enricher.
pub struct CommitFileEnricher<G> {
    git: Arc<G>,
    repository_root: PathBuf,
    limiter: Arc<Semaphore>,
    cache: MemoCache<String, Vec<String>>,
}

impl<G> CommitFileEnricher<G>
where
    G: GitProvider + 'static,
{
    pub fn new(git: Arc<G>, repository_root: PathBuf, limiter: Arc<Semaphore>) -> Self {
        Self {
            git,
            repository_root,
            limiter,
            cache: MemoCache::new(),
        }
    }

    /// Returns the commits in input order, each with its file list.
    ///
    /// # Errors
    ///
    /// Fails as soon as any lookup fails; no partial result is returned.
    pub async fn enrich(&self, commits: &[Commit]) -> Result<Vec<EnrichedCommit>> {
        let enriched = try_join_all(commits.iter().map(|commit| async move {
            let files = self.files_of(&commit.hash).await?;
            Ok::<_, FilterError>(commit.clone().with_files(files))
        }))
        .await?;

        debug!(commits = enriched.len(), "enriched commits with file lists");
        Ok(enriched)
    }

    async fn files_of(&self, hash: &str) -> Result<Vec<String>> {
        self.cache
            .get_or_try_init(hash.to_string(), || async move {
                let _permit = self.limiter.acquire().await?;
                let git = Arc::clone(&self.git);
                let root = self.repository_root.clone();
                let hash = hash.to_string();

                let files =
                    tokio::task::spawn_blocking(move || git.commit_files(&root, &hash)).await??;
                Ok::<_, FilterError>(files)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MOCK_ROOT, MockGitProvider, hashes, make_commit};
    use std::time::Duration;

    fn enricher(
        git: MockGitProvider,
        limit: usize,
    ) -> (Arc<MockGitProvider>, CommitFileEnricher<MockGitProvider>) {
        let git = Arc::new(git);
        let enricher = CommitFileEnricher::new(
            Arc::clone(&git),
            PathBuf::from(MOCK_ROOT),
            Arc::new(Semaphore::new(limit)),
        );
        (git, enricher)
    }

    #[tokio::test]
    async fn attaches_files_in_input_order() {
        let (_, enricher) = enricher(
            MockGitProvider::new()
                .with_commit("c1", &["module1/a.js"])
                .with_commit("c2", &["module2/b.js", "module2/c.js"])
                .with_commit("c3", &["README.md"]),
            8,
        );
        let commits = vec![make_commit("c3"), make_commit("c1"), make_commit("c2")];

        let enriched = enricher.enrich(&commits).await.expect("enrichment succeeds");

        assert_eq!(hashes(&enriched), vec!["c3", "c1", "c2"]);
        assert_eq!(enriched[0].files, vec!["README.md"]);
        assert_eq!(enriched[2].files, vec!["module2/b.js", "module2/c.js"]);
        assert_eq!(enriched[1].commit, commits[1]);
    }

    #[tokio::test]
    async fn repeated_hash_is_looked_up_once() {
        let (git, enricher) = enricher(MockGitProvider::new().with_commit("c1", &["a.txt"]), 8);
        let commits = vec![make_commit("c1"), make_commit("c1"), make_commit("c1")];

        let enriched = enricher.enrich(&commits).await.expect("enrichment succeeds");
        let again = enricher.enrich(&commits[..1]).await.expect("enrichment succeeds");

        assert_eq!(enriched.len(), 3);
        assert_eq!(again[0].files, vec!["a.txt"]);
        assert_eq!(git.lookups(), vec!["c1"]);
    }

    #[tokio::test]
    async fn empty_commit_has_no_files() {
        let (_, enricher) = enricher(MockGitProvider::new().with_commit("empty", &[]), 8);

        let enriched = enricher
            .enrich(&[make_commit("empty")])
            .await
            .expect("enrichment succeeds");

        assert!(enriched[0].files.is_empty());
    }

    #[tokio::test]
    async fn unknown_hash_fails_the_whole_batch() {
        let (_, enricher) = enricher(MockGitProvider::new().with_commit("c1", &["a.txt"]), 8);

        let result = enricher
            .enrich(&[make_commit("c1"), make_commit("missing")])
            .await;

        let err = result.expect_err("unknown hash must fail");
        assert!(matches!(
            &err,
            FilterError::Git(scope_git::GitError::CommitNotFound { hash }) if hash == "missing"
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn lookups_respect_concurrency_limit() {
        let mut git = MockGitProvider::new().with_delay(Duration::from_millis(20));
        let mut commits = Vec::new();
        for i in 0..12 {
            let hash = format!("c{i}");
            git = git.with_commit(&hash, &["file.txt"]);
            commits.push(make_commit(&hash));
        }
        let (git, enricher) = enricher(git, 2);

        let enriched = enricher.enrich(&commits).await.expect("enrichment succeeds");

        assert_eq!(enriched.len(), 12);
        assert_eq!(git.lookups().len(), 12);
        assert!(git.max_in_flight() <= 2);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let (git, enricher) = enricher(MockGitProvider::new(), 8);

        let enriched = enricher.enrich(&[]).await.expect("enrichment succeeds");

        assert!(enriched.is_empty());
        assert!(git.lookups().is_empty());
    }
}
