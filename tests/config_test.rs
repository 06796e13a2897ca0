//! Tests for loading configuration from disk.

use std::io::Write;
use std::path::PathBuf;
use strictly_tictactoe::Config;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"game.log\"\nlog_filter = \"debug\"").expect("write config");

    let config = Config::load(Some(file.path())).expect("config loads");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(*config.show_hints());
}

#[test]
fn test_no_path_and_no_default_file_gives_defaults() {
    // Other tests in this file only use absolute paths, so moving the
    // working directory does not disturb them.
    let dir = tempfile::tempdir().expect("temp dir");
    std::env::set_current_dir(dir.path()).expect("enter temp dir");
    assert!(!dir.path().join(strictly_tictactoe::DEFAULT_CONFIG_PATH).exists());

    let config = Config::load(None).expect("defaults load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.toml");
    let err = Config::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_hints = [").expect("write config");

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
