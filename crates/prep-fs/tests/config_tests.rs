use prep_fs::config::{load_toml, load_toml_if_exists};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    project: String,
}

#[test]
fn test_load_toml_with_bom() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release-prep.toml");
    fs::write(&path, b"\xEF\xBB\xBFproject = \"logme\"\n").unwrap();

    let sample: Sample = load_toml(&path).unwrap();
    assert_eq!(sample.project, "logme");
}

#[test]
fn test_load_toml_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("release-prep.toml");
    fs::write(&path, "project = ").unwrap();

    let result: prep_fs::Result<Sample> = load_toml(&path);
    assert!(matches!(result, Err(prep_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_absent_config_is_none() {
    let temp = TempDir::new().unwrap();
    let result: Option<Sample> = load_toml_if_exists(&temp.path().join("missing.toml")).unwrap();
    assert!(result.is_none());
}
