//! The build-environment model: named scalar options plus the ordered
//! include-search-path collection.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::EnvError;

/// Option key: project root directory, set by the host build tool.
pub const PROJECT_DIR: &str = "PROJECT_DIR";
/// Option key: build-output directory, set by the host build tool.
pub const BUILD_DIR: &str = "BUILD_DIR";
/// Option key: capture toolchain-internal include dirs in the database.
pub const COMPILATIONDB_INCLUDE_TOOLCHAIN: &str = "COMPILATIONDB_INCLUDE_TOOLCHAIN";
/// Option key: where the host writes `compile_commands.json`.
pub const COMPILATIONDB_PATH: &str = "COMPILATIONDB_PATH";

/// A scalar build-environment option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

/// The build environment handed to configuration passes.
///
/// Holds the named scalar options and the ordered include-search-path
/// collection (`CPPPATH` in PlatformIO terms). The path collection is
/// append-only: entries are never removed, reordered, or deduplicated, so
/// callers observe exactly the registration order.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    options: BTreeMap<String, OptionValue>,
    cpp_path: Vec<PathBuf>,
    packages_dir: PathBuf,
}

/// Convert a potentially relative path to an absolute path.
fn abs_path<P: AsRef<Path>>(p: P) -> PathBuf {
    if p.as_ref().is_absolute() {
        p.as_ref().to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(p.as_ref()))
            .unwrap_or_else(|_| p.as_ref().to_path_buf())
    }
}

/// Packages root used by [`BuildEnv::new`] when the caller sets nothing:
/// a fixed relative fallback, resolved by the compiler against the working
/// directory like any other relative include path. Hosts that want the real
/// per-user root use [`BuildEnv::from_host_env`] or
/// [`BuildEnv::with_packages_dir`].
pub const DEFAULT_PACKAGES_DIR: &str = ".platformio/packages";

/// Locate the toolchain packages root from the process environment.
/// Only [`BuildEnv::from_host_env`] consults this.
fn host_packages_dir() -> Result<PathBuf, EnvError> {
    if let Ok(p) = env::var("PLATFORMIO_PACKAGES_DIR") {
        return Ok(abs_path(p));
    }
    if let Ok(p) = env::var("HOME") {
        return Ok(PathBuf::from(p).join(".platformio/packages"));
    }
    if let Ok(p) = env::var("USERPROFILE") {
        return Ok(PathBuf::from(p).join(".platformio/packages"));
    }
    Err(EnvError::MissingVar("HOME"))
}

impl BuildEnv {
    /// Create an environment from explicit directories, the way a host build
    /// tool would seed it before running extra scripts. Deterministic: no
    /// process environment is consulted. The toolchain packages root starts
    /// at the relative [`DEFAULT_PACKAGES_DIR`]; set an absolute root with
    /// [`BuildEnv::with_packages_dir`], or construct via
    /// [`BuildEnv::from_host_env`] to resolve it under `HOME`.
    pub fn new(project_dir: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        let mut options = BTreeMap::new();
        let project_dir = project_dir.into();
        let build_dir = build_dir.into();
        options.insert(
            PROJECT_DIR.to_string(),
            OptionValue::Str(project_dir.to_string_lossy().into_owned()),
        );
        options.insert(
            BUILD_DIR.to_string(),
            OptionValue::Str(build_dir.to_string_lossy().into_owned()),
        );
        BuildEnv {
            options,
            cpp_path: Vec::new(),
            packages_dir: PathBuf::from(DEFAULT_PACKAGES_DIR),
        }
    }

    /// Construct the environment from process environment variables:
    /// `PLATFORMIO_PROJECT_DIR` and `PLATFORMIO_BUILD_DIR` are required,
    /// `PLATFORMIO_PACKAGES_DIR` overrides the packages root.
    pub fn from_host_env() -> Result<Self, EnvError> {
        let project_dir = env::var("PLATFORMIO_PROJECT_DIR")
            .map(abs_path)
            .map_err(|_| EnvError::MissingVar("PLATFORMIO_PROJECT_DIR"))?;
        let build_dir = env::var("PLATFORMIO_BUILD_DIR")
            .map(abs_path)
            .map_err(|_| EnvError::MissingVar("PLATFORMIO_BUILD_DIR"))?;
        let packages_dir = host_packages_dir()?;
        Ok(BuildEnv::new(project_dir, build_dir).with_packages_dir(packages_dir))
    }

    /// Replace the toolchain packages root.
    pub fn with_packages_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.packages_dir = dir.into();
        self
    }

    /// Overwrite a named scalar option. Last write wins.
    pub fn replace(&mut self, key: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        tracing::trace!(key, ?value, "replace option");
        self.options.insert(key.to_string(), value);
    }

    /// Append one directory to the include-search-path collection.
    /// Order is preserved and duplicates are kept.
    pub fn append_cpp_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::trace!(path = %path.display(), "append include path");
        self.cpp_path.push(path);
    }

    /// The include-search paths registered so far, in registration order.
    pub fn cpp_path(&self) -> &[PathBuf] {
        &self.cpp_path
    }

    /// The toolchain packages root used for fixed toolchain include paths.
    pub fn packages_dir(&self) -> &Path {
        &self.packages_dir
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, EnvError> {
        match self.options.get(key) {
            Some(OptionValue::Bool(v)) => Ok(*v),
            Some(OptionValue::Str(_)) => Err(EnvError::OptionType {
                key: key.to_string(),
                expected: "boolean",
            }),
            None => Err(EnvError::MissingOption(key.to_string())),
        }
    }

    pub fn get_str(&self, key: &str) -> Result<&str, EnvError> {
        match self.options.get(key) {
            Some(OptionValue::Str(v)) => Ok(v),
            Some(OptionValue::Bool(_)) => Err(EnvError::OptionType {
                key: key.to_string(),
                expected: "string",
            }),
            None => Err(EnvError::MissingOption(key.to_string())),
        }
    }

    /// The project root directory the host seeded the environment with.
    pub fn project_dir(&self) -> Result<&Path, EnvError> {
        self.get_str(PROJECT_DIR).map(Path::new)
    }

    /// The build-output directory the host seeded the environment with.
    pub fn build_dir(&self) -> Result<&Path, EnvError> {
        self.get_str(BUILD_DIR).map(Path::new)
    }
}
