use std::path::{Path, PathBuf};

use crate::kind::ManifestKind;

/// Walks upward from `start_dir` looking for the nearest manifest of `kind`.
///
/// The walk stops after checking `boundary` when given, otherwise at the
/// filesystem root. `start_dir` does not need to exist, which lets callers
/// resolve owners of files deleted by a commit.
#[must_use]
pub fn find_nearest_manifest(
    start_dir: &Path,
    boundary: Option<&Path>,
    kind: ManifestKind,
) -> Option<PathBuf> {
    let mut current = Some(start_dir);

    while let Some(dir) = current {
        let candidate = dir.join(kind.file_name());
        if candidate.is_file() {
            return Some(candidate);
        }

        if boundary.is_some_and(|boundary| dir == boundary) {
            break;
        }

        current = dir.parent();
    }

    None
}
