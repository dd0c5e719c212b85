use std::fs;
use std::path::{Path, PathBuf};

use pio_compiledb::{
    BuildEnv, COMPILATIONDB_INCLUDE_TOOLCHAIN, COMPILATIONDB_PATH, EnvError, configure,
    configure_compiledb, load_compile_commands,
};

fn env_with_fixed_roots() -> BuildEnv {
    BuildEnv::new("/proj", "/proj/.pio/build/bartdepart")
        .with_packages_dir("/opt/platformio/packages")
}

#[test]
fn test_compiledb_options_after_configuration() {
    let mut env = env_with_fixed_roots();
    configure_compiledb(&mut env).unwrap();

    assert!(env.get_bool(COMPILATIONDB_INCLUDE_TOOLCHAIN).unwrap());
    assert_eq!(
        env.get_str(COMPILATIONDB_PATH).unwrap(),
        "/proj/.pio/build/bartdepart/compile_commands.json"
    );
    // The option setter alone never touches the include-path collection.
    assert!(env.cpp_path().is_empty());
}

#[test]
fn test_full_configuration_pass() {
    let mut env = env_with_fixed_roots();
    configure(&mut env).unwrap();

    assert!(env.get_bool(COMPILATIONDB_INCLUDE_TOOLCHAIN).unwrap());
    assert_eq!(
        env.get_str(COMPILATIONDB_PATH).unwrap(),
        "/proj/.pio/build/bartdepart/compile_commands.json"
    );
    assert_eq!(env.cpp_path().len(), 12);
    assert!(env.cpp_path().contains(&PathBuf::from("/proj/wled00")));
    assert!(
        env.cpp_path()
            .contains(&PathBuf::from("/proj/lib/ESP8266PWM/src"))
    );
}

#[test]
fn test_repeat_run_is_idempotent_on_options_but_not_on_paths() {
    let mut env = env_with_fixed_roots();
    configure(&mut env).unwrap();
    let flag = env.get_bool(COMPILATIONDB_INCLUDE_TOOLCHAIN).unwrap();
    let db_path = env.get_str(COMPILATIONDB_PATH).unwrap().to_string();
    let paths_after_one = env.cpp_path().len();

    configure(&mut env).unwrap();
    assert_eq!(env.get_bool(COMPILATIONDB_INCLUDE_TOOLCHAIN).unwrap(), flag);
    assert_eq!(env.get_str(COMPILATIONDB_PATH).unwrap(), db_path);
    assert_eq!(env.cpp_path().len(), 2 * paths_after_one);
}

#[test]
fn test_load_compile_commands_accepts_both_entry_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("compile_commands.json");
    fs::write(
        &db_path,
        r#"[
            {
                "directory": "/proj",
                "command": "xtensa-lx106-elf-g++ -Iwled00 -c wled00/wled.cpp -o wled.o",
                "file": "wled00/wled.cpp",
                "output": "wled.o"
            },
            {
                "directory": "/proj",
                "arguments": ["xtensa-lx106-elf-g++", "-c", "wled00/udp.cpp"],
                "file": "wled00/udp.cpp"
            }
        ]"#,
    )
    .unwrap();

    let commands = load_compile_commands(&db_path).unwrap();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].directory, Path::new("/proj"));
    assert_eq!(commands[0].file, Path::new("wled00/wled.cpp"));
    assert!(commands[0].command.as_deref().unwrap().contains("-Iwled00"));
    assert_eq!(commands[0].output.as_deref(), Some(Path::new("wled.o")));
    assert!(commands[1].command.is_none());
    assert_eq!(commands[1].arguments.as_ref().unwrap().len(), 3);
}

#[test]
fn test_load_compile_commands_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("compile_commands.json");
    match load_compile_commands(&db_path) {
        Err(EnvError::Io { path, .. }) => assert_eq!(path, db_path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_compile_commands_reports_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("compile_commands.json");
    fs::write(&db_path, "{ not a database").unwrap();
    assert!(matches!(
        load_compile_commands(&db_path),
        Err(EnvError::Malformed(_))
    ));
}

#[test]
fn test_configured_path_round_trips_through_the_host_artifact() {
    // Simulate the host: configure the env, then write the database at the
    // path the options point to, then read it back through the model.
    let dir = tempfile::tempdir().unwrap();
    let build_dir = dir.path().join("build");
    fs::create_dir_all(&build_dir).unwrap();

    let mut env = BuildEnv::new(dir.path(), &build_dir);
    configure(&mut env).unwrap();

    let db_path = PathBuf::from(env.get_str(COMPILATIONDB_PATH).unwrap());
    assert_eq!(db_path, build_dir.join("compile_commands.json"));

    fs::write(
        &db_path,
        r#"[{"directory": "/proj", "command": "cc -c a.c", "file": "a.c"}]"#,
    )
    .unwrap();
    let commands = load_compile_commands(&db_path).unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].file, Path::new("a.c"));
}
