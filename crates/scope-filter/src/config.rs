use std::num::NonZeroUsize;

use scope_manifest::ManifestKind;
use tokio::sync::Semaphore;

use crate::{FilterError, Result};

/// Environment variable overriding how many lookups may run at once.
pub const MAX_CONCURRENCY_ENV: &str = "COMMIT_SCOPE_MAX_CONCURRENCY";

pub const DEFAULT_MAX_CONCURRENCY: usize = 500;

/// Settings for one filtering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    max_concurrency: NonZeroUsize,
    manifest_kind: ManifestKind,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_concurrency: NonZeroUsize::new(DEFAULT_MAX_CONCURRENCY)
                .unwrap_or(NonZeroUsize::MIN),
            manifest_kind: ManifestKind::default(),
        }
    }
}

impl FilterConfig {
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConcurrency`] if [`MAX_CONCURRENCY_ENV`] is
    /// set to something other than a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config = Self::default();

        match lookup(MAX_CONCURRENCY_ENV) {
            Some(raw) if !raw.trim().is_empty() => {
                let limit = parse_concurrency(&raw)?;
                Ok(config.with_max_concurrency(limit))
            }
            _ => Ok(config),
        }
    }

    #[must_use]
    pub fn with_max_concurrency(mut self, limit: NonZeroUsize) -> Self {
        self.max_concurrency = limit;
        self
    }

    #[must_use]
    pub fn with_manifest_kind(mut self, kind: ManifestKind) -> Self {
        self.manifest_kind = kind;
        self
    }

    #[must_use]
    pub fn max_concurrency(&self) -> NonZeroUsize {
        self.max_concurrency
    }

    #[must_use]
    pub fn manifest_kind(&self) -> ManifestKind {
        self.manifest_kind
    }
}

/// # Errors
///
/// Returns [`FilterError::InvalidConcurrency`] unless `raw` is a positive integer
/// no larger than [`Semaphore::MAX_PERMITS`].
pub fn parse_concurrency(raw: &str) -> Result<NonZeroUsize> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .ok()
        .filter(|limit| limit.get() <= Semaphore::MAX_PERMITS)
        .ok_or_else(|| FilterError::InvalidConcurrency {
            value: raw.to_string(),
        })
}
