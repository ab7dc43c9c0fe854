//! Integration tests for layered Settings loading.

use std::fs;

use tempfile::TempDir;

use myapp::cli::CliError;
use myapp::config::Settings;
use myapp::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = write(&dir, "global.toml", "[user]\ndefault_role = \"STAFF\"\n");

    let settings = Settings::load_layers(Some(&global), None).expect("load");

    assert_eq!(settings.user.default_role, "STAFF");
    assert_eq!(settings.backup.destination, "./backup/", "untouched key keeps default");
}

#[test]
fn given_global_and_explicit_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write(
        &dir,
        "global.toml",
        "[user]\ndefault_role = \"STAFF\"\n[backup]\ndestination = \"/global\"\n",
    );
    let explicit = write(&dir, "local.toml", "[backup]\ndestination = \"/explicit\"\n");

    let settings = Settings::load_layers(Some(&global), Some(&explicit)).expect("load");

    assert_eq!(settings.user.default_role, "STAFF");
    assert_eq!(settings.backup.destination, "/explicit");
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load_layers(None, Some(&missing)).unwrap_err();

    assert!(matches!(err, CliError::Config { .. }));
    assert_eq!(err.exit_code(), myapp::exitcode::CONFIG);
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let broken = write(&dir, "broken.toml", "[user\ndefault_role = ");

    let err = Settings::load_layers(None, Some(&broken)).unwrap_err();

    assert!(matches!(err, CliError::Config { .. }));
}

#[test]
fn given_wrong_value_type_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let bad = write(&dir, "bad.toml", "[backup]\ndestination = [1, 2]\n");

    let err = Settings::load_layers(None, Some(&bad)).unwrap_err();

    assert!(err.to_string().starts_with("config error:"));
}
