//! Manifest-style relative paths
//!
//! Visual Studio project files register sources with backslash separators
//! regardless of the host platform. `ManifestPath` keeps that rendering as its
//! only representation so that comparisons against `Include="..."` values are
//! plain string comparisons.

use std::path::Path;

use serde::Serialize;

/// Separator used inside manifest `Include` attributes.
pub const MANIFEST_SEPARATOR: char = '\\';

/// Prefix marking a path that climbs out of the manifest's directory.
const PARENT_PREFIX: &str = "..\\";

/// A relative path rendered with backslash separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ManifestPath {
    /// Always uses backslashes, never forward slashes
    inner: String,
}

impl ManifestPath {
    /// Create a new ManifestPath, converting forward slashes to backslashes.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            inner: path.as_ref().replace('/', "\\"),
        }
    }

    /// Build a ManifestPath from a relative filesystem path.
    pub fn from_fs(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }

    /// Get the backslash-separated string.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consume the path and return the backslash-separated string.
    pub fn into_string(self) -> String {
        self.inner
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let segment = Self::new(segment);
        if self.inner.is_empty() {
            return segment;
        }
        let inner = if self.inner.ends_with(MANIFEST_SEPARATOR) {
            format!("{}{}", self.inner, segment.inner)
        } else {
            format!("{}{}{}", self.inner, MANIFEST_SEPARATOR, segment.inner)
        };
        Self { inner }
    }

    /// Prepend a textual prefix such as `..\logme\`.
    ///
    /// The prefix is taken verbatim (after separator conversion); no
    /// separator is inserted between the prefix and the path.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            inner: format!("{}{}", Self::new(prefix).inner, self.inner),
        }
    }

    /// Remove a leading textual prefix, if present.
    pub fn strip_prefix(&self, prefix: &str) -> Option<Self> {
        let prefix = Self::new(prefix);
        self.inner.strip_prefix(prefix.as_str()).map(Self::new)
    }

    /// Remove a single leading `..\` segment, if present.
    pub fn strip_parent_prefix(&self) -> &str {
        self.inner.strip_prefix(PARENT_PREFIX).unwrap_or(&self.inner)
    }

    /// Get the parent directory.
    ///
    /// A path without any separator has the parent `.`.
    pub fn parent(&self) -> Self {
        let trimmed = self.inner.trim_end_matches(MANIFEST_SEPARATOR);
        let inner = match trimmed.rfind(MANIFEST_SEPARATOR) {
            Some(idx) if idx > 0 => trimmed[..idx].to_string(),
            Some(_) => MANIFEST_SEPARATOR.to_string(),
            None => ".".to_string(),
        };
        Self { inner }
    }
}

impl AsRef<str> for ManifestPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
