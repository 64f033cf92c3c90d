use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("commit filtering failed")]
    Filter(#[from] scope_filter::FilterError),

    #[error("failed to list commits")]
    Git(#[from] scope_git::GitError),

    #[error("failed to read commits from '{path}'")]
    ReadCommits {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid commit list: expected a JSON array of objects with a 'hash' field")]
    ParseCommits(#[source] serde_json::Error),

    #[error("failed to render JSON output")]
    RenderJson(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
