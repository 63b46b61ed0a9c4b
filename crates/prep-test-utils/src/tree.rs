//! [`TestTree`] builder for release-prep test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fixtures::{self, Shape};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// A temporary repository directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use prep_test_utils::TestTree;
///
/// let tree = TestTree::logme("2.4.10");
/// tree.add_source("logme/source/Widgets/New.cpp");
/// tree.assert_file_contains("CMakeLists.txt", "VERSION 2.4.10");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a complete logme tree that is consistent for `version`.
    ///
    /// Manifests and filter documents are written with CRLF line endings
    /// and a byte-order mark.
    pub fn logme(version: &str) -> Self {
        let tree = Self::new();

        for file in fixtures::COMPILED.iter().chain(fixtures::HEADERS) {
            let path = file.repo_path();
            if path != fixtures::VERSION_HEADER {
                tree.add_source(&path);
            }
        }

        tree.write(fixtures::CHANGELOG, &fixtures::changelog(version));
        tree.write(fixtures::BUILD_CONFIG, &fixtures::build_config(version));
        tree.write(fixtures::VERSION_HEADER, &fixtures::version_header(version));
        tree.write_with_bom(fixtures::FLAT_MANIFEST, &fixtures::manifest(Shape::Flat));
        tree.write_with_bom(fixtures::FLAT_FILTERS, &fixtures::filters(Shape::Flat));
        tree.write_with_bom(fixtures::NESTED_MANIFEST, &fixtures::manifest(Shape::Nested));
        tree.write_with_bom(fixtures::NESTED_FILTERS, &fixtures::filters(Shape::Nested));
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel`.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        self.write_bytes(rel, content.as_bytes());
    }

    /// Write `content` to `rel` behind a UTF-8 byte-order mark.
    pub fn write_with_bom(&self, rel: &str, content: &str) {
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(content.as_bytes());
        self.write_bytes(rel, &bytes);
    }

    pub fn write_bytes(&self, rel: &str, content: &[u8]) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestTree: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree: failed to write {}: {e}", path.display()));
    }

    /// Add an empty source file.
    pub fn add_source(&self, rel: &str) {
        self.write(rel, "// stub\n");
    }

    /// Delete a file.
    pub fn remove(&self, rel: &str) {
        let path = self.path(rel);
        fs::remove_file(&path)
            .unwrap_or_else(|e| panic!("TestTree: failed to remove {}: {e}", path.display()));
    }

    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        let path = self.path(rel);
        fs::read(&path).unwrap_or_else(|e| panic!("Could not read file {}: {e}", path.display()))
    }

    /// Read `rel` as text, without a leading byte-order mark.
    pub fn read(&self, rel: &str) -> String {
        let bytes = self.read_bytes(rel);
        let body = bytes.strip_prefix(BOM).unwrap_or(&bytes);
        String::from_utf8(body.to_vec())
            .unwrap_or_else(|e| panic!("File {rel} is not UTF-8: {e}"))
    }

    /// Assert that `rel` starts with a byte-order mark.
    ///
    /// # Panics
    /// Panics if the file cannot be read or has no byte-order mark.
    pub fn assert_has_bom(&self, rel: &str) {
        assert!(
            self.read_bytes(rel).starts_with(BOM),
            "Expected {rel} to start with a byte-order mark"
        );
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }

    /// Assert that the file at `rel` does **not** contain `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or contains `content`.
    pub fn assert_file_not_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}",
            rel,
            content
        );
    }
}
