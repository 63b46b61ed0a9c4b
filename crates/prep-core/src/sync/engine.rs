//! ReleaseEngine implementation
//!
//! The engine reconciles the source tree with both project descriptions and
//! the version declarations. A run validates that every required file
//! exists, then either reports issues or applies fixes.

use std::path::{Path, PathBuf};

use prep_blocks::EntryTag;
use prep_fs::TextDocument;
use serde::Serialize;

use crate::Result;
use crate::build_config::{self, VersionUpdate};
use crate::changelog;
use crate::classify::{Classifier, ProjectShape};
use crate::config::Layout;
use crate::editor::{self, EditOutcome};
use crate::ident::IdGenerator;
use crate::version::VersionTriple;
use crate::version_header;

use super::check::{CheckReport, Issue};
use super::sources::SourceSet;

/// Both project shapes, in processing order.
const SHAPES: [ProjectShape; 2] = [ProjectShape::Flat, ProjectShape::Nested];

/// Whether a run may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Read-only consistency check
    #[default]
    Check,
    /// Fix everything except the changelog
    Update,
}

/// Report from an update run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    /// Version written, in canonical form
    pub version: String,
    /// One line per applied change
    pub changes: Vec<String>,
    /// Fixes that had to be skipped, such as a block that could not be located
    pub diagnostics: Vec<String>,
    /// Whether the changelog documents the version after the update
    pub changelog_documented: bool,
}

impl UpdateReport {
    fn absorb(&mut self, outcome: EditOutcome) {
        self.changes.extend(outcome.changes);
        self.diagnostics.extend(outcome.diagnostics);
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Required files are absent; nothing was checked
    MissingFiles(Vec<PathBuf>),
    /// Every check passed
    Consistent(CheckReport),
    /// At least one check failed
    IssuesFound(CheckReport),
    /// Update mode ran to completion
    Updated(UpdateReport),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Consistent(_) => 0,
            Self::IssuesFound(_) => 1,
            Self::MissingFiles(_) => 3,
            Self::Updated(report) if report.changelog_documented => 0,
            Self::Updated(_) => 1,
        }
    }
}

/// Engine for checking and preparing a release
pub struct ReleaseEngine {
    /// Repository root
    root: PathBuf,
    layout: Layout,
    version: VersionTriple,
}

impl ReleaseEngine {
    pub fn new(root: impl Into<PathBuf>, layout: Layout, version: VersionTriple) -> Self {
        Self {
            root: root.into(),
            layout,
            version,
        }
    }

    /// Create an engine for `root`, reading `release-prep.toml` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout file exists but cannot be parsed.
    pub fn open(root: impl Into<PathBuf>, version: VersionTriple) -> Result<Self> {
        let root = root.into();
        let layout = Layout::load(&root)?;
        Ok(Self::new(root, layout, version))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn version(&self) -> &VersionTriple {
        &self.version
    }

    /// Required files that do not exist, in report order.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        self.layout
            .required_files(&self.root)
            .into_iter()
            .filter(|p| !p.exists())
            .collect()
    }

    fn load(&self, rel: &str) -> Result<TextDocument> {
        Ok(TextDocument::load(self.root.join(rel))?)
    }

    fn save_if_modified(doc: &TextDocument) -> Result<()> {
        if doc.is_modified() {
            doc.save()?;
        }
        Ok(())
    }

    /// Run every read-only check.
    ///
    /// # Errors
    ///
    /// Returns an error if a required document cannot be read or the
    /// source tree cannot be walked.
    pub fn check(&self) -> Result<CheckReport> {
        let layout = &self.layout;
        let version = self.version.to_string();
        let mut report = CheckReport::new(&version);

        let changelog = self.load(&layout.changelog)?;
        if !changelog::is_documented(changelog.text(), &self.version)? {
            report.push(Issue::ChangelogSection {
                document: layout.changelog.clone(),
                version: version.clone(),
            });
        }

        let cmake = self.load(&layout.build_config)?;
        if !build_config::declares_version(cmake.text(), &layout.project, &self.version)? {
            report.push(Issue::ProjectDeclaration {
                document: layout.build_config.clone(),
                project: layout.project.clone(),
                version: version.clone(),
            });
        }

        let sources = SourceSet::collect(&self.root, layout)?;

        for shape in SHAPES {
            let project = layout.project_for(shape);
            let expected = sources.for_project(project);
            let manifest = self.load(&project.manifest)?;
            let missing =
                editor::missing_entries(manifest.text(), &expected.compiled, EntryTag::ClCompile);
            if !missing.is_empty() {
                report.push(Issue::ManifestEntries {
                    document: project.manifest.clone(),
                    missing,
                });
            }
        }

        for shape in SHAPES {
            let project = layout.project_for(shape);
            let expected = sources.for_project(project);
            let filters = self.load(&project.filters)?;
            let compiled =
                editor::missing_entries(filters.text(), &expected.compiled, EntryTag::ClCompile);
            let headers =
                editor::missing_entries(filters.text(), &expected.headers, EntryTag::ClInclude);
            if !compiled.is_empty() || !headers.is_empty() {
                report.push(Issue::FilterEntries {
                    document: project.filters.clone(),
                    compiled,
                    headers,
                });
            }
            let groups = editor::undeclared_groups(filters.text());
            if !groups.is_empty() {
                report.push(Issue::UndeclaredGroups {
                    document: project.filters.clone(),
                    groups,
                });
            }
        }

        let header = self.load(&layout.version_header)?;
        if !version_header::version_matches(header.text(), &layout.macro_prefix, &self.version)? {
            report.push(Issue::VersionMacros {
                document: layout.version_header.clone(),
                version,
            });
        }

        tracing::info!(issues = report.issues.len(), "check complete");
        Ok(report)
    }

    /// Apply every fix, then re-read the changelog.
    ///
    /// Documents are written only when they changed. A block that cannot be
    /// located skips that one insertion and is recorded as a diagnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be read or written.
    pub fn update(&self) -> Result<UpdateReport> {
        let layout = &self.layout;
        let version = self.version.to_string();
        let mut report = UpdateReport {
            version: version.clone(),
            changes: Vec::new(),
            diagnostics: Vec::new(),
            changelog_documented: false,
        };

        let mut cmake = self.load(&layout.build_config)?;
        match build_config::update_project_version(&mut cmake, &layout.project, &self.version)? {
            VersionUpdate::Updated { from } => {
                cmake.save()?;
                report.changes.push(format!(
                    "{}: project version {from} -> {version}",
                    layout.build_config
                ));
            }
            VersionUpdate::NotFound => report.diagnostics.push(format!(
                "Cannot find project({} VERSION X.Y.Z) in {}",
                layout.project, layout.build_config
            )),
            VersionUpdate::Unchanged => {}
        }

        let sources = SourceSet::collect(&self.root, layout)?;
        let ids = IdGenerator::new(&layout.id_namespace);

        for shape in SHAPES {
            let project = layout.project_for(shape);
            let expected = sources.for_project(project);
            let mut manifest = self.load(&project.manifest)?;
            let outcome = editor::ensure_entries_present(
                &mut manifest,
                &project.manifest,
                &expected.compiled,
                EntryTag::ClCompile,
            );
            Self::save_if_modified(&manifest)?;
            report.absorb(outcome);
        }

        for shape in SHAPES {
            let project = layout.project_for(shape);
            let expected = sources.for_project(project);
            let classifier = Classifier::new(shape, layout.keywords.clone());
            let mut filters = self.load(&project.filters)?;
            let outcome = editor::ensure_grouped_entries_present(
                &mut filters,
                &project.filters,
                &expected.compiled,
                &expected.headers,
                &classifier,
                &ids,
            );
            Self::save_if_modified(&filters)?;
            report.absorb(outcome);
        }

        let mut header = self.load(&layout.version_header)?;
        for name in version_header::missing_macros(header.text(), &layout.macro_prefix)? {
            report
                .diagnostics
                .push(format!("{}: {name} is not defined", layout.version_header));
        }
        if version_header::sync_version(&mut header, &layout.macro_prefix, &self.version)? {
            header.save()?;
            report
                .changes
                .push(format!("{}: updated to {version}", layout.version_header));
        }

        let changelog = self.load(&layout.changelog)?;
        report.changelog_documented = changelog::is_documented(changelog.text(), &self.version)?;

        tracing::info!(
            changes = report.changes.len(),
            diagnostics = report.diagnostics.len(),
            "update complete"
        );
        Ok(report)
    }

    /// Validate, then check or update.
    ///
    /// # Errors
    ///
    /// Propagates read, write and walk failures.
    pub fn run(&self, mode: RunMode) -> Result<Outcome> {
        let missing = self.missing_files();
        if !missing.is_empty() {
            tracing::warn!(count = missing.len(), "required files missing");
            return Ok(Outcome::MissingFiles(missing));
        }

        match mode {
            RunMode::Check => {
                let report = self.check()?;
                if report.is_consistent() {
                    Ok(Outcome::Consistent(report))
                } else {
                    Ok(Outcome::IssuesFound(report))
                }
            }
            RunMode::Update => Ok(Outcome::Updated(self.update()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(changelog_documented: bool) -> UpdateReport {
        UpdateReport {
            version: "1.0.0".to_string(),
            changes: Vec::new(),
            diagnostics: Vec::new(),
            changelog_documented,
        }
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Outcome::Consistent(CheckReport::new("1.0.0")).exit_code(), 0);
        assert_eq!(Outcome::IssuesFound(CheckReport::new("1.0.0")).exit_code(), 1);
        assert_eq!(Outcome::MissingFiles(vec![PathBuf::from("x")]).exit_code(), 3);
        assert_eq!(Outcome::Updated(report(true)).exit_code(), 0);
        assert_eq!(Outcome::Updated(report(false)).exit_code(), 1);
    }

    #[test]
    fn empty_root_reports_all_files_missing() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ReleaseEngine::new(dir.path(), Layout::default(), VersionTriple::new(1, 0, 0));
        let outcome = engine.run(RunMode::Update).unwrap();
        match outcome {
            Outcome::MissingFiles(files) => assert_eq!(files.len(), 7),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
