use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by typed access to a [`crate::BuildEnv`] and by the
/// compilation-database reader.
#[derive(Debug, Error)]
pub enum EnvError {
    /// A named option the caller asked for was never set on the environment.
    #[error("build environment option `{0}` is not set")]
    MissingOption(String),

    /// The option exists but holds the other scalar variant.
    #[error("build environment option `{key}` is not a {expected} option")]
    OptionType { key: String, expected: &'static str },

    /// A process environment variable needed to construct the environment is
    /// absent and no fallback applies.
    #[error("environment variable `{0}` is not set")]
    MissingVar(&'static str),

    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The compilation database at the configured path did not parse.
    #[error("malformed compilation database")]
    Malformed(#[from] serde_json::Error),
}
