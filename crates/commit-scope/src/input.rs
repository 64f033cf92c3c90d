use std::io::Read;
use std::path::Path;

use scope_core::Commit;
use scope_git::{CommitInfo, Repository};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{CliError, Result};

const STDIN_MARKER: &str = "-";

/// Reads a JSON array of commits from `source`, or from stdin for `-`.
pub(crate) fn read_commits(source: &Path) -> Result<Vec<Commit>> {
    let content = if source == Path::new(STDIN_MARKER) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::ReadCommits {
                path: source.to_path_buf(),
                source: e,
            })?;
        buffer
    } else {
        std::fs::read_to_string(source).map_err(|e| CliError::ReadCommits {
            path: source.to_path_buf(),
            source: e,
        })?
    };

    parse_commits(&content)
}

fn parse_commits(content: &str) -> Result<Vec<Commit>> {
    let commits: Vec<Commit> = serde_json::from_str(content).map_err(CliError::ParseCommits)?;
    debug!(count = commits.len(), "read commits from input");
    Ok(commits)
}

/// Lists `since..head` newest first; the whole history of `head` without `since`.
pub(crate) fn commits_from_git(
    start_path: &Path,
    since: Option<&str>,
    head: &str,
) -> Result<Vec<Commit>> {
    let repo = Repository::open(start_path)?;
    let commits: Vec<Commit> = repo
        .commits_between(since, head)?
        .into_iter()
        .map(to_commit)
        .collect();

    debug!(count = commits.len(), head, since, "listed commits from git");
    Ok(commits)
}

fn to_commit(info: CommitInfo) -> Commit {
    let subject = info.subject().to_string();
    let body = info.body().to_string();

    Commit::new(info.sha, subject)
        .with_metadata("body", Value::String(body))
        .with_metadata(
            "author",
            json!({ "name": info.author_name, "email": info.author_email }),
        )
        .with_metadata("time", Value::from(info.time))
}
