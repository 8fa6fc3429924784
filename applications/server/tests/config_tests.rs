/// Configuration loading tests
use std::io::Write;
use study_server::{ServerConfig, ServerError};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file(
        r#"
[server]
host = "127.0.0.1"
port = 9000

[playback]
volume = 0.7
fade_in_ms = 3000
"#,
    );

    let config = ServerConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.playback.volume, 0.7);
    assert_eq!(config.playback.fade_in_ms, 3000);
    assert_eq!(config.playback.fade_out_ms, 500, "unset keys keep defaults");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = config_file("[server]\nport = 8123\n");

    let config = ServerConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8123);
    assert_eq!(config.playback.fade_in_ms, 2000);
    assert_eq!(config.playback.load_timeout_ms, None);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = ServerConfig::load(Some(path.as_path()));

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = config_file("[playback]\nvolume = 2.0\n");

    let config = ServerConfig::load(Some(file.path())).unwrap();

    assert!(config.validate().is_err());
}
