use std::collections::HashSet;

use scope_core::EnrichedCommit;

/// Concatenates `a` and `b`, dropping any commit whose hash already appeared.
#[must_use]
pub fn combine(a: Vec<EnrichedCommit>, b: Vec<EnrichedCommit>) -> Vec<EnrichedCommit> {
    let mut seen = HashSet::new();
    a.into_iter()
        .chain(b)
        .filter(|commit| seen.insert(commit.hash().to_string()))
        .collect()
}
