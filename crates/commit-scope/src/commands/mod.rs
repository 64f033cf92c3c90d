mod filter;
mod locate;

use std::path::Path;

use clap::Subcommand;
use scope_manifest::ManifestKind;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the commits relevant to the package
    Filter(filter::FilterArgs),
    /// Show which package the start directory belongs to
    Locate(locate::LocateArgs),
}

impl Commands {
    pub(crate) async fn execute(
        self,
        start_path: &Path,
        manifest_kind: ManifestKind,
    ) -> Result<()> {
        match self {
            Self::Filter(args) => filter::run(args, start_path, manifest_kind).await,
            Self::Locate(args) => locate::run(&args, start_path, manifest_kind),
        }
    }
}
