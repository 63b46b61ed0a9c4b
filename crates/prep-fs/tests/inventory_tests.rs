use pretty_assertions::assert_eq;
use prep_fs::{SourceRole, collect_files};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

#[test]
fn test_collect_walks_nested_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "logme/source/Logger.cpp");
    touch(temp.path(), "logme/source/Control/Control.cpp");
    touch(temp.path(), "logme/source/Control/Command/Help.cpp");
    touch(temp.path(), "logme/source/Control/Json.h");

    let files = collect_files(temp.path(), "logme/source", SourceRole::Compiled.extensions()).unwrap();
    let names: Vec<String> = files.into_iter().map(|p| p.into_string()).collect();

    assert_eq!(
        names,
        vec![
            "logme\\source\\Control\\Command\\Help.cpp",
            "logme\\source\\Control\\Control.cpp",
            "logme\\source\\Logger.cpp",
        ]
    );
}

#[test]
fn test_collect_is_deterministic() {
    let temp = TempDir::new().unwrap();
    for name in ["b.h", "a.h", "z/c.h", "A.h"] {
        touch(temp.path(), &format!("logme/include/{name}"));
    }

    let first = collect_files(temp.path(), "logme/include", &["h"]).unwrap();
    let second = collect_files(temp.path(), "logme/include", &["h"]).unwrap();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
}

#[test]
fn test_collect_skips_directories_named_like_files() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("logme/source/weird.cpp")).unwrap();
    touch(temp.path(), "logme/source/weird.cpp/real.cpp");

    let files = collect_files(temp.path(), "logme/source", &["cpp"]).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].as_str(), "logme\\source\\weird.cpp\\real.cpp");
}
