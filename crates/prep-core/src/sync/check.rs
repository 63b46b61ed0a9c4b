//! Consistency issues found by a read-only check
//!
//! Issues are numbered by category so the console report reads the same
//! from release to release:
//!
//! 1. changelog section
//! 2. build configuration version
//! 3. compiled entries in a manifest
//! 4. compiled and header entries, or filter declarations, in a filter document
//! 5. version header macros

use std::fmt;

use prep_fs::{ManifestPath, SourceRole};
use serde::Serialize;

/// One failed consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The changelog has no `## X.Y.Z` section
    ChangelogSection { document: String, version: String },
    /// The build configuration does not declare the version
    ProjectDeclaration {
        document: String,
        project: String,
        version: String,
    },
    /// A manifest lacks compiled entries
    ManifestEntries {
        document: String,
        missing: Vec<ManifestPath>,
    },
    /// A filter document lacks compiled or header entries
    FilterEntries {
        document: String,
        compiled: Vec<ManifestPath>,
        headers: Vec<ManifestPath>,
    },
    /// A filter document files entries under filters it never declares
    UndeclaredGroups { document: String, groups: Vec<String> },
    /// The version header disagrees with the version
    VersionMacros { document: String, version: String },
}

impl Issue {
    /// Category number shown in front of the issue.
    pub fn number(&self) -> u8 {
        match self {
            Self::ChangelogSection { .. } => 1,
            Self::ProjectDeclaration { .. } => 2,
            Self::ManifestEntries { .. } => 3,
            Self::FilterEntries { .. } | Self::UndeclaredGroups { .. } => 4,
            Self::VersionMacros { .. } => 5,
        }
    }

    /// Document the issue is about.
    pub fn document(&self) -> &str {
        match self {
            Self::ChangelogSection { document, .. }
            | Self::ProjectDeclaration { document, .. }
            | Self::ManifestEntries { document, .. }
            | Self::FilterEntries { document, .. }
            | Self::UndeclaredGroups { document, .. }
            | Self::VersionMacros { document, .. } => document,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], indent: &str) -> fmt::Result {
    for item in items {
        write!(f, "\n{indent}{item}")?;
    }
    Ok(())
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) ", self.number())?;
        match self {
            Self::ChangelogSection { document, version } => {
                write!(f, "{document}: missing section '## {version}'")
            }
            Self::ProjectDeclaration {
                document,
                project,
                version,
            } => write!(f, "{document}: project({project} VERSION {version}) not found"),
            Self::ManifestEntries { document, missing } => {
                write!(
                    f,
                    "{document}: missing {} entries ({}):",
                    SourceRole::Compiled.label(),
                    missing.len()
                )?;
                write_list(f, missing, "    ")
            }
            Self::FilterEntries {
                document,
                compiled,
                headers,
            } => {
                write!(f, "{document}: missing filter entries:")?;
                if !compiled.is_empty() {
                    write!(f, "\n  - {:<5}({}):", SourceRole::Compiled.label(), compiled.len())?;
                    write_list(f, compiled, "      ")?;
                }
                if !headers.is_empty() {
                    write!(f, "\n  - {:<5}({}):", SourceRole::Header.label(), headers.len())?;
                    write_list(f, headers, "      ")?;
                }
                Ok(())
            }
            Self::UndeclaredGroups { document, groups } => {
                write!(f, "{document}: undeclared filters ({}):", groups.len())?;
                write_list(f, groups, "    ")
            }
            Self::VersionMacros { document, version } => {
                write!(f, "{document}: version macros do not match {version}")
            }
        }
    }
}

/// Result of a read-only consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Version checked against, in canonical form
    pub version: String,
    /// Failed checks, in category order
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, issue: Issue) {
        tracing::debug!(number = issue.number(), document = issue.document(), "check failed");
        self.issues.push(issue);
    }

    /// True when no check failed.
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}
