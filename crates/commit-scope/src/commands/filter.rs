use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::Args;
use scope_core::{FilterMode, FixedPathProvider};
use scope_filter::FilterConfig;
use scope_filter::config::parse_concurrency;
use scope_filter::operations::RelevantCommitsOperation;
use scope_filter::providers::{FileSystemManifestProvider, Git2Provider};
use scope_manifest::ManifestKind;

use crate::error::Result;
use crate::input::{commits_from_git, read_commits};
use crate::output::OutputFormat;

#[derive(Args)]
pub(crate) struct FilterArgs {
    /// Leave out commits reachable from this revision (e.g. the last release tag)
    #[arg(long, value_name = "REV")]
    since: Option<String>,

    /// Revision to list commits from
    #[arg(long, value_name = "REV", default_value = "HEAD")]
    head: String,

    /// Read commits as a JSON array from FILE (`-` for stdin) instead of git
    #[arg(long, value_name = "FILE", conflicts_with = "since")]
    commits: Option<PathBuf>,

    /// Which relevance rules apply
    #[arg(long, value_enum, default_value_t = FilterMode::Both)]
    mode: FilterMode,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Maximum concurrent lookups (overrides COMMIT_SCOPE_MAX_CONCURRENCY)
    #[arg(long, value_name = "N", value_parser = parse_concurrency)]
    max_concurrency: Option<NonZeroUsize>,
}

pub(crate) async fn run(
    args: FilterArgs,
    start_path: &Path,
    manifest_kind: ManifestKind,
) -> Result<()> {
    let config = match args.max_concurrency {
        Some(limit) => FilterConfig::default().with_max_concurrency(limit),
        None => FilterConfig::from_env()?,
    }
    .with_manifest_kind(manifest_kind);

    let commits = match &args.commits {
        Some(source) => read_commits(source)?,
        None => commits_from_git(start_path, args.since.as_deref(), &args.head)?,
    };

    let operation = RelevantCommitsOperation::new(
        Git2Provider::new(),
        FileSystemManifestProvider::new(config.manifest_kind()),
        FixedPathProvider::new(start_path),
        config,
    );
    let outcome = operation.execute(&commits, args.mode).await?;

    print!("{}", args.format.formatter().format_outcome(&outcome)?);

    Ok(())
}
