use std::path::PathBuf;

use thiserror::Error;

use crate::config::MAX_CONCURRENCY_ENV;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Git(#[from] scope_git::GitError),

    #[error(transparent)]
    Manifest(#[from] scope_manifest::ManifestError),

    #[error("invalid {} value '{value}': expected a positive integer", MAX_CONCURRENCY_ENV)]
    InvalidConcurrency { value: String },

    #[error("failed to determine the start directory")]
    StartPath(#[source] std::io::Error),

    #[error("package directory '{package_dir}' is outside repository '{root}'")]
    PackageOutsideRepository { package_dir: PathBuf, root: PathBuf },

    #[error("background lookup task failed")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("lookup limiter was closed")]
    LimiterClosed(#[from] tokio::sync::AcquireError),
}

pub type Result<T> = std::result::Result<T, FilterError>;
