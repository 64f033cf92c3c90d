use std::path::Path;

use clap::Args;
use scope_core::FixedPathProvider;
use scope_filter::FilterConfig;
use scope_filter::operations::RelevantCommitsOperation;
use scope_filter::providers::{FileSystemManifestProvider, Git2Provider};
use scope_manifest::ManifestKind;

use crate::error::Result;
use crate::output::{LocationReport, OutputFormat};

#[derive(Args)]
pub(crate) struct LocateArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

pub(crate) fn run(args: &LocateArgs, start_path: &Path, manifest_kind: ManifestKind) -> Result<()> {
    let operation = RelevantCommitsOperation::new(
        Git2Provider::new(),
        FileSystemManifestProvider::new(manifest_kind),
        FixedPathProvider::new(start_path),
        FilterConfig::default().with_manifest_kind(manifest_kind),
    );
    let (location, manifest) = operation.locate()?;

    let report = LocationReport::new(location, manifest);
    print!("{}", args.format.formatter().format_location(&report)?);

    Ok(())
}
