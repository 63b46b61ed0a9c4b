//! Expected manifest entries, discovered from the source tree

use std::path::Path;

use prep_fs::{ManifestPath, SourceRole, collect_files};
use serde::Serialize;

use crate::Result;
use crate::config::{Layout, ProjectConfig};

/// Source files relative to the project directory, e.g. `source\Channel.cpp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceSet {
    pub compiled: Vec<ManifestPath>,
    pub headers: Vec<ManifestPath>,
}

impl SourceSet {
    /// Walk the project's source and include directories under `root`.
    pub fn collect(root: &Path, layout: &Layout) -> Result<Self> {
        let source_dir = layout.source_dir();
        let include_dir = layout.include_dir();

        let compiled = collect_files(root, &source_dir, SourceRole::Compiled.extensions())?;

        let mut headers = collect_files(root, &include_dir, SourceRole::Header.extensions())?;
        headers.extend(collect_files(root, &source_dir, SourceRole::Header.extensions())?);
        headers.sort();
        headers.dedup();

        let project_prefix = format!("{}\\", layout.project);
        let relative = |paths: Vec<ManifestPath>| -> Vec<ManifestPath> {
            paths
                .into_iter()
                .map(|p| p.strip_prefix(&project_prefix).unwrap_or(p))
                .collect()
        };

        let set = Self {
            compiled: relative(compiled),
            headers: relative(headers),
        };
        tracing::debug!(
            compiled = set.compiled.len(),
            headers = set.headers.len(),
            "discovered sources"
        );
        Ok(set)
    }

    /// Entries as a project description registers them.
    pub fn for_project(&self, project: &ProjectConfig) -> Self {
        let prefixed = |paths: &[ManifestPath]| -> Vec<ManifestPath> {
            let mut out: Vec<ManifestPath> =
                paths.iter().map(|p| p.with_prefix(&project.prefix)).collect();
            out.sort();
            out
        };
        Self {
            compiled: prefixed(&self.compiled),
            headers: prefixed(&self.headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn collects_relative_to_project() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "logme/source/Logger.cpp");
        touch(dir.path(), "logme/source/Net/Socket.cpp");
        touch(dir.path(), "logme/source/Net/Socket.h");
        touch(dir.path(), "logme/include/Logme/Logme.h");
        touch(dir.path(), "logme/source/notes.txt");

        let set = SourceSet::collect(dir.path(), &Layout::default()).unwrap();

        assert_eq!(
            set.compiled,
            vec![ManifestPath::new(r"source\Logger.cpp"), ManifestPath::new(r"source\Net\Socket.cpp")]
        );
        assert_eq!(
            set.headers,
            vec![ManifestPath::new(r"include\Logme\Logme.h"), ManifestPath::new(r"source\Net\Socket.h")]
        );
    }

    #[test]
    fn nested_project_prefixes_entries() {
        let set = SourceSet {
            compiled: vec![ManifestPath::new(r"source\A.cpp")],
            headers: vec![ManifestPath::new(r"include\A.h")],
        };
        let nested = set.for_project(&Layout::default().nested);
        assert_eq!(nested.compiled, vec![ManifestPath::new(r"..\logme\source\A.cpp")]);
        assert_eq!(nested.headers, vec![ManifestPath::new(r"..\logme\include\A.h")]);
    }

    #[test]
    fn empty_tree_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SourceSet::collect(dir.path(), &Layout::default()).unwrap(), SourceSet::default());
    }
}
