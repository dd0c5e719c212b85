//! Include-path registrar: the fixed set of directories the IDE indexer and
//! static analyzers need on the compiler's include-search path.

use crate::env::BuildEnv;
use crate::error::EnvError;

/// Project-relative include directories, joined with the project root.
/// Library dependencies land under `.pio/libdeps/<pioenv>/` once the host
/// build tool has fetched them; the rest live in the project tree itself.
pub const LIB_INCLUDE_SUFFIXES: [&str; 9] = [
    ".pio/libdeps/bartdepart/ESPAsyncUDP/src",
    "lib/ESP8266PWM/src",
    ".pio/libdeps/bartdepart/FastLED/src",
    ".pio/libdeps/bartdepart/IRremoteESP8266/src",
    ".pio/libdeps/bartdepart/NeoPixelBus/src",
    ".pio/libdeps/bartdepart/ESPAsyncWebServerWLED/src",
    ".pio/libdeps/bartdepart/QuickEspNow/src",
    "usermods/usermod_v2_bart_depart",
    "wled00",
];

/// Toolchain include directories, joined with the packages root. These sit
/// outside the project tree, inside the framework package the host installed.
pub const TOOLCHAIN_INCLUDE_SUFFIXES: [&str; 3] = [
    "framework-arduinoespressif8266/cores/esp8266",
    "framework-arduinoespressif8266/tools/sdk/include",
    "framework-arduinoespressif8266/libraries/ESP8266WiFi/src",
];

/// Append every fixed include directory to the environment's include-search
/// path collection: the project-relative entries first, then the toolchain
/// entries, each in listed order.
///
/// No existence checks and no deduplication happen here; a directory that is
/// missing on disk surfaces later as a compile-time include error, reported
/// by the host build tool. Calling this twice appends the full set twice.
pub fn register_include_paths(env: &mut BuildEnv) -> Result<(), EnvError> {
    let project_dir = env.project_dir()?.to_path_buf();
    for suffix in LIB_INCLUDE_SUFFIXES {
        env.append_cpp_path(project_dir.join(suffix));
    }

    let packages_dir = env.packages_dir().to_path_buf();
    for suffix in TOOLCHAIN_INCLUDE_SUFFIXES {
        env.append_cpp_path(packages_dir.join(suffix));
    }

    tracing::debug!(
        count = LIB_INCLUDE_SUFFIXES.len() + TOOLCHAIN_INCLUDE_SUFFIXES.len(),
        project_dir = %project_dir.display(),
        "registered include search paths"
    );
    Ok(())
}
