//! Source inventory
//!
//! Lists the files under a project subdirectory that should be registered in
//! the manifests.

use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, ManifestPath, Result};

/// Role a source file plays in a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRole {
    /// Translation unit registered with `<ClCompile>`
    Compiled,
    /// Declaration file registered with `<ClInclude>`
    Header,
}

impl SourceRole {
    /// File extensions (without the dot) belonging to this role.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Compiled => &["cpp"],
            Self::Header => &["h"],
        }
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Compiled => ".cpp",
            Self::Header => ".h",
        }
    }
}

/// Collect files under `root/relative_dir` whose extension matches.
///
/// Paths are returned relative to `root` (so they start with
/// `relative_dir`), rendered with backslashes, sorted and de-duplicated.
/// A missing directory yields an empty list.
pub fn collect_files(
    root: &Path,
    relative_dir: &str,
    extensions: &[&str],
) -> Result<Vec<ManifestPath>> {
    let base = root.join(relative_dir);
    if !base.exists() {
        tracing::debug!(dir = %base.display(), "source directory absent, nothing to collect");
        return Ok(Vec::new());
    }

    let wanted: Vec<String> = extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect();
    let prefix = ManifestPath::new(relative_dir.trim_end_matches(['/', '\\']));

    let mut out = Vec::new();
    for entry in WalkDir::new(&base) {
        let entry = entry.map_err(|e| Error::Walk {
            path: base.clone(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| wanted.contains(&ext));
        if !matches {
            continue;
        }

        let Ok(rel) = path.strip_prefix(&base) else {
            continue;
        };
        out.push(prefix.join(ManifestPath::from_fs(rel)));
    }

    out.sort();
    out.dedup();
    tracing::debug!(dir = %base.display(), count = out.len(), "collected source files");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect_files(dir.path(), "logme/source", &["cpp"]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("logme/source");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("Upper.CPP"), "").unwrap();
        fs::write(src.join("lower.cpp"), "").unwrap();
        fs::write(src.join("notes.txt"), "").unwrap();

        let files = collect_files(dir.path(), "logme/source", &[".cpp"]).unwrap();
        let names: Vec<&str> = files.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            vec!["logme\\source\\Upper.CPP", "logme\\source\\lower.cpp"]
        );
    }
}
