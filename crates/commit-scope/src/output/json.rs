use scope_core::EnrichedCommit;
use scope_filter::operations::FilterOutcome;
use serde::Serialize;

use super::{LocationReport, OutputFormatter};
use crate::error::{CliError, Result};

pub(crate) struct JsonFormatter;

#[derive(Serialize)]
struct OutcomeDocument<'a> {
    package: Option<&'a str>,
    path: String,
    commits: &'a [EnrichedCommit],
}

fn render<T: Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value).map_err(CliError::RenderJson)?;
    rendered.push('\n');
    Ok(rendered)
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &FilterOutcome) -> Result<String> {
        render(&OutcomeDocument {
            package: outcome.package_name.as_deref(),
            path: outcome.package_path.to_string(),
            commits: &outcome.commits,
        })
    }

    fn format_location(&self, report: &LocationReport) -> Result<String> {
        render(report)
    }
}
