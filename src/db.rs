//! Reader for the compilation database the host build tool produces at the
//! configured path, in the Clang JSON Compilation Database format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// One entry of `compile_commands.json`: the exact compiler invocation used
/// for one source file. Either `command` (a single shell string) or
/// `arguments` (a pre-split argv) is present, depending on the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// Working directory the command runs in; relative paths in the entry
    /// resolve against it.
    pub directory: PathBuf,
    /// The translation unit being compiled.
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Read and parse a compilation database, typically from the path stored in
/// the `COMPILATIONDB_PATH` option once the host has written it.
pub fn load_compile_commands(path: &Path) -> Result<Vec<CompileCommand>, EnvError> {
    let contents = fs::read_to_string(path).map_err(|source| EnvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let commands = serde_json::from_str(&contents)?;
    Ok(commands)
}
