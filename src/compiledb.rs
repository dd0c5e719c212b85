//! Compilation-database options: capture behavior and output location.
//!
//! The host build tool writes `compile_commands.json` itself at the end of a
//! build; this module only sets the options that control where it lands and
//! whether toolchain-internal include dirs are captured in it.

use crate::env::{BuildEnv, COMPILATIONDB_INCLUDE_TOOLCHAIN, COMPILATIONDB_PATH};
use crate::error::EnvError;
use crate::registrar::register_include_paths;

/// File name of the database inside the build-output directory.
pub const COMPILE_COMMANDS_FILE: &str = "compile_commands.json";

fn set_include_toolchain(env: &mut BuildEnv) {
    env.replace(COMPILATIONDB_INCLUDE_TOOLCHAIN, true);
}

fn set_compiledb_path(env: &mut BuildEnv) -> Result<(), EnvError> {
    let db_path = env.build_dir()?.join(COMPILE_COMMANDS_FILE);
    env.replace(COMPILATIONDB_PATH, db_path.to_string_lossy().as_ref());
    tracing::debug!(path = %db_path.display(), "compilation database target set");
    Ok(())
}

/// Set the two compilation-database options, one write each:
/// `COMPILATIONDB_INCLUDE_TOOLCHAIN` to `true`, unconditionally, and
/// `COMPILATIONDB_PATH` to `<build_dir>/compile_commands.json`.
pub fn configure_compiledb(env: &mut BuildEnv) -> Result<(), EnvError> {
    set_include_toolchain(env);
    set_compiledb_path(env)
}

/// Run the whole configuration pass: enable toolchain capture, register the
/// fixed include-search paths, then point the database at the build-output
/// directory.
///
/// Repeating the pass leaves both scalar options in the same final state but
/// appends the full include-path set again.
pub fn configure(env: &mut BuildEnv) -> Result<(), EnvError> {
    set_include_toolchain(env);
    register_include_paths(env)?;
    set_compiledb_path(env)
}
