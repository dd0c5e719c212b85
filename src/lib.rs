//! Build-environment configuration for PlatformIO-style firmware projects.
//!
//! This crate models the build environment an embedded build tool hands to its
//! extra scripts, and reproduces one such script's job in library form:
//! register the compiler include-search paths an IDE indexer needs, and point
//! the build tool's compilation database (`compile_commands.json`) at the
//! project's build-output directory.
//!
//! The environment is an explicit [`BuildEnv`] value passed by reference into
//! the configuration functions, never ambient process state, so every mutation
//! the script performs is visible and testable.
//!
//! ## Environment Variables
//!
//! - `PLATFORMIO_PROJECT_DIR`: project root for [`BuildEnv::from_host_env`]
//! - `PLATFORMIO_BUILD_DIR`: build-output directory for [`BuildEnv::from_host_env`]
//! - `PLATFORMIO_PACKAGES_DIR`: override the toolchain packages root
//!   (default: `$HOME/.platformio/packages`)

pub mod compiledb;
pub mod db;
pub mod diagnostics;
pub mod env;
mod error;
pub mod registrar;

pub use compiledb::{COMPILE_COMMANDS_FILE, configure, configure_compiledb};
pub use db::{CompileCommand, load_compile_commands};
pub use diagnostics::missing_include_dirs;
pub use env::{
    BUILD_DIR, BuildEnv, COMPILATIONDB_INCLUDE_TOOLCHAIN, COMPILATIONDB_PATH,
    DEFAULT_PACKAGES_DIR, OptionValue, PROJECT_DIR,
};
pub use error::EnvError;
pub use registrar::{LIB_INCLUDE_SUFFIXES, TOOLCHAIN_INCLUDE_SUFFIXES, register_include_paths};
