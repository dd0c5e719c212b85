//! Advisory checks on a configured environment.

use std::path::PathBuf;

use crate::env::BuildEnv;

/// Registered include-search paths that do not exist on disk right now.
///
/// The configuration pass itself never validates paths; this is a separate,
/// read-only report for tooling that wants to warn before the compiler does.
/// Each missing directory is also emitted as a `tracing` warning.
pub fn missing_include_dirs(env: &BuildEnv) -> Vec<PathBuf> {
    let missing: Vec<PathBuf> = env
        .cpp_path()
        .iter()
        .filter(|p| !p.is_dir())
        .cloned()
        .collect();
    for dir in &missing {
        tracing::warn!(dir = %dir.display(), "include search path does not exist");
    }
    missing
}
