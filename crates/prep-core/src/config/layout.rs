//! Layout parsing for release-prep.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::classify::ProjectShape;

/// Name of the optional layout file at the repository root.
pub const CONFIG_FILE: &str = "release-prep.toml";

/// One project description: a manifest and its filter document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Manifest path relative to the repository root
    pub manifest: String,
    /// Filter document path relative to the repository root
    pub filters: String,
    /// Text prepended to project-relative source paths in this manifest
    #[serde(default)]
    pub prefix: String,
}

/// Directory keywords the nested-shape classifier looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierKeywords {
    pub source: String,
    pub include: String,
    pub control: String,
    pub command: String,
}

impl Default for ClassifierKeywords {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            include: "include".to_string(),
            control: "Control".to_string(),
            command: "Command".to_string(),
        }
    }
}

/// Locations of every file the release check touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Project directory name, also the CMake project name
    pub project: String,
    pub changelog: String,
    pub build_config: String,
    pub version_header: String,
    /// Prefix of the `*_VERSION_*` macros in the version header
    pub macro_prefix: String,
    /// Seed for group identifiers
    pub id_namespace: String,
    pub flat: ProjectConfig,
    pub nested: ProjectConfig,
    pub keywords: ClassifierKeywords,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            project: "logme".to_string(),
            changelog: "changelog.md".to_string(),
            build_config: "CMakeLists.txt".to_string(),
            version_header: "logme/include/Logme/version.h".to_string(),
            macro_prefix: "LOGME".to_string(),
            id_namespace: "logme-release-prep".to_string(),
            flat: ProjectConfig {
                manifest: "logme/logme.vcxproj".to_string(),
                filters: "logme/logme.vcxproj.filters".to_string(),
                prefix: String::new(),
            },
            nested: ProjectConfig {
                manifest: "dynamic/logmed.vcxproj".to_string(),
                filters: "dynamic/logmed.vcxproj.filters".to_string(),
                prefix: "..\\logme\\".to_string(),
            },
            keywords: ClassifierKeywords::default(),
        }
    }
}

impl Layout {
    /// Load the layout for `root`, falling back to defaults when no
    /// `release-prep.toml` exists.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let layout: Option<Self> = prep_fs::config::load_toml_if_exists(&path)?;
        if layout.is_some() {
            tracing::debug!(path = %path.display(), "loaded layout overrides");
        }
        Ok(layout.unwrap_or_default())
    }

    /// Directory holding compiled sources, relative to the root.
    pub fn source_dir(&self) -> String {
        format!("{}/{}", self.project, self.keywords.source)
    }

    /// Directory holding public headers, relative to the root.
    pub fn include_dir(&self) -> String {
        format!("{}/{}", self.project, self.keywords.include)
    }

    /// Project description for a shape.
    pub fn project_for(&self, shape: ProjectShape) -> &ProjectConfig {
        match shape {
            ProjectShape::Flat => &self.flat,
            ProjectShape::Nested => &self.nested,
        }
    }

    /// Every file that must exist before anything is checked, in report order.
    pub fn required_files(&self, root: &Path) -> Vec<PathBuf> {
        [
            &self.changelog,
            &self.build_config,
            &self.flat.manifest,
            &self.flat.filters,
            &self.nested.manifest,
            &self.nested.filters,
            &self.version_header,
        ]
        .into_iter()
        .map(|rel| root.join(rel))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let layout: Layout = toml::from_str("macro_prefix = \"ACME\"\n[keywords]\ncontrol = \"Ctl\"\n").unwrap();
        assert_eq!(layout.macro_prefix, "ACME");
        assert_eq!(layout.keywords.control, "Ctl");
        assert_eq!(layout.keywords.command, "Command");
        assert_eq!(layout.nested.prefix, "..\\logme\\");
    }

    #[test]
    fn required_files_are_rooted() {
        let layout = Layout::default();
        let files = layout.required_files(Path::new("/repo"));
        assert_eq!(files.len(), 7);
        assert_eq!(files[0], Path::new("/repo/changelog.md"));
        assert_eq!(files[6], Path::new("/repo/logme/include/Logme/version.h"));
    }
}
