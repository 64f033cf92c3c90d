use scope_filter::operations::FilterOutcome;

use super::{LocationReport, OutputFormatter};
use crate::error::Result;

const SHORT_HASH_LEN: usize = 7;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn short_hash(hash: &str) -> &str {
        hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_outcome(&self, outcome: &FilterOutcome) -> Result<String> {
        let label = outcome.package_label();

        if outcome.commits.is_empty() {
            return Ok(format!("No relevant commits for {label}.\n"));
        }

        let mut output = format!("Relevant commits for {label}: {}\n", outcome.commits.len());
        for commit in &outcome.commits {
            output.push_str(&format!(
                "  {} {}\n",
                Self::short_hash(commit.hash()),
                commit.subject()
            ));
        }

        Ok(output)
    }

    fn format_location(&self, report: &LocationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Package: {}\n",
            report.name.as_deref().unwrap_or("(unnamed)")
        ));
        if let Some(version) = &report.version {
            output.push_str(&format!("Version: {version}\n"));
        }
        output.push_str(&format!("Path: {}\n", report.path));
        match &report.manifest {
            Some(manifest) => output.push_str(&format!("Manifest: {}\n", manifest.display())),
            None => output.push_str("Manifest: none\n"),
        }
        output.push_str(&format!(
            "Repository: {}\n",
            report.repository_root.display()
        ));

        Ok(output)
    }
}
