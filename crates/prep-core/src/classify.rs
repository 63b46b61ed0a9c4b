//! Filter (group) inference for new manifest entries
//!
//! The two project descriptions group files differently:
//!
//! - **Flat** (`logme.vcxproj`): a file's filter is its directory,
//!   e.g. `source\Backend\FileBackend.cpp` -> `source\Backend`.
//! - **Nested** (`logmed.vcxproj`): compiled sources are grouped by
//!   subsystem, e.g. `..\logme\source\Backend\FileBackend.cpp` -> `Backend`,
//!   with `Control\Command` kept as a two-level group. Headers under
//!   `include` are grouped by directory like the flat shape.

use prep_fs::{MANIFEST_SEPARATOR, ManifestPath};
use serde::Serialize;

use crate::config::ClassifierKeywords;

/// Directory-layout convention of a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectShape {
    /// Manifest lives next to the sources; filters mirror directories
    Flat,
    /// Manifest lives in a sibling directory; filters name subsystems
    Nested,
}

impl ProjectShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Nested => "nested",
        }
    }
}

impl std::fmt::Display for ProjectShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Infers filter names for one project shape.
#[derive(Debug, Clone)]
pub struct Classifier {
    shape: ProjectShape,
    keywords: ClassifierKeywords,
}

impl Classifier {
    pub fn new(shape: ProjectShape, keywords: ClassifierKeywords) -> Self {
        Self { shape, keywords }
    }

    pub fn shape(&self) -> ProjectShape {
        self.shape
    }

    /// Filter name for a manifest-relative path.
    pub fn classify(&self, path: &ManifestPath) -> String {
        match self.shape {
            ProjectShape::Flat => path.parent().into_string(),
            ProjectShape::Nested => self.classify_nested(path),
        }
    }

    fn classify_nested(&self, path: &ManifestPath) -> String {
        let kw = &self.keywords;
        let parts: Vec<&str> = path.strip_parent_prefix().split(MANIFEST_SEPARATOR).collect();

        if parts.len() >= 3 && parts[1].eq_ignore_ascii_case(&kw.source) {
            let group = parts[2];
            if group.eq_ignore_ascii_case(&kw.control)
                && parts.get(3).is_some_and(|p| p.eq_ignore_ascii_case(&kw.command))
            {
                return format!("{}{}{}", kw.control, MANIFEST_SEPARATOR, kw.command);
            }
            return group.to_string();
        }

        // Headers under include, and anything off the usual layout, group by directory.
        path.parent().into_string()
    }
}

/// Classify with the default keywords.
pub fn classify_path(path: &ManifestPath, shape: ProjectShape) -> String {
    Classifier::new(shape, ClassifierKeywords::default()).classify(path)
}
