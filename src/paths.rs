//! Default Store Discovery
//!
//! Ordered fallback list of candidate store locations. The producing
//! application writes `vectors.db` either next to its executable or into a
//! build output folder depending on how it was launched.

use std::path::{Path, PathBuf};

/// Candidate store locations relative to the working directory, tried in
/// order. First existing path wins.
pub const DEFAULT_CANDIDATES: [&str; 3] =
    ["vectors.db", "build/vectors.db", "build/Release/vectors.db"];

/// Probe the candidate list under `base` and return the first existing path.
pub fn find_default_store(base: &Path) -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| base.join(candidate))
        .find(|path| path.exists())
}
