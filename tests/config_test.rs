// tests/config_test.rs
use semver_bump::config::{load_config, Config, CONFIG_FILE_NAME};
use semver_bump::SemverBumpError;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[git]
remote = "upstream"
tag_prefix = "v"
fetch_tags = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.git.remote, "upstream");
    assert_eq!(config.git.tag_prefix, "v");
    assert!(config.git.fetch_tags);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_config(Some(&missing)).unwrap_err();
    assert!(matches!(err, SemverBumpError::Config(_)));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git\nremote = ").unwrap();
    temp_file.flush().unwrap();

    assert!(matches!(
        load_config(Some(temp_file.path())),
        Err(SemverBumpError::Config(_))
    ));
}

#[test]
#[serial]
fn test_discovers_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[git]\ntag_prefix = \"release-\"\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    let config = result.unwrap();
    assert_eq!(config.git.tag_prefix, "release-");
    assert_eq!(config.git.remote, "origin");
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.git.remote, "origin");
    assert!(config.git.tag_prefix.is_empty());
    assert!(!config.git.fetch_tags);
}
