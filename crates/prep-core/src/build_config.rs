//! CMake `project(NAME VERSION X.Y.Z)` declaration

use prep_fs::TextDocument;
use regex::Regex;

use crate::version::VersionTriple;
use crate::{Error, Result};

/// Result of rewriting the project version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionUpdate {
    /// The declaration already carries the target version
    Unchanged,
    /// The declaration was rewritten from the given version
    Updated { from: String },
    /// No `project(NAME VERSION X.Y.Z)` line exists
    NotFound,
}

/// Line-anchored project declaration for `project`, capturing the version.
fn declaration_pattern(project: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?m)^[ \t]*project[ \t]*\([ \t]*{}[ \t]+VERSION[ \t]+([0-9]+\.[0-9]+\.[0-9]+)[ \t]*\)[ \t]*\r?$",
        regex::escape(project)
    );
    Regex::new(&pattern).map_err(|e| Error::pattern("project declaration", e))
}

/// Whether `text` declares `project` at exactly `version`.
pub fn declares_version(text: &str, project: &str, version: &VersionTriple) -> Result<bool> {
    let expected = version.to_string();
    let re = declaration_pattern(project)?;
    Ok(re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .any(|v| v.as_str() == expected))
}

/// Rewrite the version of the first `project` declaration.
pub fn update_project_version(
    doc: &mut TextDocument,
    project: &str,
    version: &VersionTriple,
) -> Result<VersionUpdate> {
    let re = declaration_pattern(project)?;
    let Some(span) = re.captures(doc.text()).and_then(|caps| caps.get(1)) else {
        tracing::warn!(path = %doc.path().display(), project, "project declaration not found");
        return Ok(VersionUpdate::NotFound);
    };

    let target = version.to_string();
    let current = span.as_str().to_string();
    if current == target {
        return Ok(VersionUpdate::Unchanged);
    }

    let mut text = doc.text().to_string();
    text.replace_range(span.range(), &target);
    doc.set_text(text);
    Ok(VersionUpdate::Updated { from: current })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CMAKE: &str = "cmake_minimum_required(VERSION 3.16)\r\nproject(logme VERSION 2.4.9)\r\nadd_subdirectory(logme)\r\n";

    #[test]
    fn detects_declared_version() {
        let v = VersionTriple::new(2, 4, 9);
        assert!(declares_version(CMAKE, "logme", &v).unwrap());
        assert!(!declares_version(CMAKE, "logme", &VersionTriple::new(2, 4, 10)).unwrap());
        assert!(!declares_version(CMAKE, "other", &v).unwrap());
    }

    #[test]
    fn tolerates_spacing() {
        let text = "  project ( logme   VERSION 1.0.0 )  \n";
        assert!(declares_version(text, "logme", &VersionTriple::new(1, 0, 0)).unwrap());
    }

    #[test]
    fn update_touches_only_version_token() {
        let mut doc = TextDocument::from_bytes("CMakeLists.txt", CMAKE.as_bytes());
        let outcome = update_project_version(&mut doc, "logme", &VersionTriple::new(2, 5, 0)).unwrap();

        assert_eq!(outcome, VersionUpdate::Updated { from: "2.4.9".to_string() });
        assert_eq!(doc.text(), CMAKE.replace("2.4.9", "2.5.0"));
    }

    #[test]
    fn update_reports_missing_declaration() {
        let mut doc = TextDocument::from_bytes("CMakeLists.txt", b"project(logme)\n");
        let outcome = update_project_version(&mut doc, "logme", &VersionTriple::new(1, 0, 0)).unwrap();
        assert_eq!(outcome, VersionUpdate::NotFound);
        assert!(!doc.is_modified());
    }

    #[test]
    fn update_is_noop_when_current() {
        let mut doc = TextDocument::from_bytes("CMakeLists.txt", CMAKE.as_bytes());
        let outcome = update_project_version(&mut doc, "logme", &VersionTriple::new(2, 4, 9)).unwrap();
        assert_eq!(outcome, VersionUpdate::Unchanged);
    }
}
