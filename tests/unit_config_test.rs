use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;
use tracelink::config::{Config, ExecutionMode};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.mode, ExecutionMode::Interactive);
    assert_eq!(config.recordings_path, PathBuf::from("recordings"));
    assert_eq!(config.log_level, "info");
    assert_eq!(config.remote_timeout, Duration::from_secs(30));
}

#[test]
fn test_from_file_parses_all_fields() {
    let file = config_file(
        r#"
mode = "batch"
recordings_path = "/var/lib/tracelink/recordings"
log_level = "debug"
remote_timeout = "5s"
"#,
    );
    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.mode, ExecutionMode::Batch);
    assert_eq!(
        config.recordings_path,
        PathBuf::from("/var/lib/tracelink/recordings")
    );
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.remote_timeout, Duration::from_secs(5));
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = config_file("log_level = \"trace\"\n");
    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.mode, ExecutionMode::Interactive);
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.remote_timeout, Duration::from_secs(30));
}

#[test]
fn test_rejects_unknown_mode() {
    let file = config_file("mode = \"daemon\"\n");
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_rejects_zero_timeout() {
    let file = config_file("remote_timeout = \"0s\"\n");
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_rejects_empty_recordings_path() {
    let file = config_file("recordings_path = \"\"\n");
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    assert!(Config::from_file("/definitely/not/here.toml").is_err());
}

#[test]
fn test_mode_parses_from_string() {
    assert_eq!(
        "interactive".parse::<ExecutionMode>().unwrap(),
        ExecutionMode::Interactive
    );
    assert_eq!(
        "batch".parse::<ExecutionMode>().unwrap(),
        ExecutionMode::Batch
    );
    assert!("daemon".parse::<ExecutionMode>().is_err());
}
