//! File contents for a small but complete logme tree.
//!
//! Manifests are rendered the way Visual Studio writes them: CRLF line
//! endings, two-space indentation, and (when written by [`crate::TestTree`])
//! a UTF-8 byte-order mark.

pub const CHANGELOG: &str = "changelog.md";
pub const BUILD_CONFIG: &str = "CMakeLists.txt";
pub const FLAT_MANIFEST: &str = "logme/logme.vcxproj";
pub const FLAT_FILTERS: &str = "logme/logme.vcxproj.filters";
pub const NESTED_MANIFEST: &str = "dynamic/logmed.vcxproj";
pub const NESTED_FILTERS: &str = "dynamic/logmed.vcxproj.filters";
pub const VERSION_HEADER: &str = "logme/include/Logme/version.h";

/// Prefix the nested manifest puts in front of project-relative paths.
pub const NESTED_PREFIX: &str = "..\\logme\\";

/// A source file and the filter each project description files it under.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile {
    /// Path relative to the `logme` project directory, with `/`
    pub path: &'static str,
    pub flat_filter: &'static str,
    pub nested_filter: &'static str,
}

impl SourceFile {
    /// Path relative to the repository root.
    pub fn repo_path(&self) -> String {
        format!("logme/{}", self.path)
    }

    /// Path as the flat manifest registers it.
    pub fn flat_entry(&self) -> String {
        self.path.replace('/', "\\")
    }

    /// Path as the nested manifest registers it.
    pub fn nested_entry(&self) -> String {
        format!("{NESTED_PREFIX}{}", self.flat_entry())
    }
}

const fn file(path: &'static str, flat_filter: &'static str, nested_filter: &'static str) -> SourceFile {
    SourceFile {
        path,
        flat_filter,
        nested_filter,
    }
}

/// Compiled sources of the fixture tree, sorted.
pub const COMPILED: &[SourceFile] = &[
    file("source/Backend/FileBackend.cpp", "source\\Backend", "Backend"),
    file("source/Control/Command/Dispatch.cpp", "source\\Control\\Command", "Control\\Command"),
    file("source/Logger.cpp", "source", "Source Files"),
];

/// Headers of the fixture tree, sorted.
pub const HEADERS: &[SourceFile] = &[
    file("include/Logme/Logme.h", "include\\Logme", "..\\logme\\include\\Logme"),
    file("include/Logme/version.h", "include\\Logme", "..\\logme\\include\\Logme"),
    file("source/Backend/FileBackend.h", "source\\Backend", "Backend"),
];

/// Which of the two project descriptions a text is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Flat,
    Nested,
}

impl Shape {
    fn entry(&self, file: &SourceFile) -> String {
        match self {
            Self::Flat => file.flat_entry(),
            Self::Nested => file.nested_entry(),
        }
    }

    fn filter<'a>(&self, file: &'a SourceFile) -> &'a str {
        match self {
            Self::Flat => file.flat_filter,
            Self::Nested => file.nested_filter,
        }
    }
}

fn crlf(lines: &[String]) -> String {
    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// A `.vcxproj` registering every fixture source.
pub fn manifest(shape: Shape) -> String {
    let mut lines: Vec<String> = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        r#"<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">"#.to_string(),
        r#"  <ItemGroup Label="ProjectConfigurations">"#.to_string(),
        r#"    <ProjectConfiguration Include="Debug|x64">"#.to_string(),
        "      <Configuration>Debug</Configuration>".to_string(),
        "      <Platform>x64</Platform>".to_string(),
        "    </ProjectConfiguration>".to_string(),
        "  </ItemGroup>".to_string(),
        "  <ItemGroup>".to_string(),
    ];
    for h in HEADERS {
        lines.push(format!(r#"    <ClInclude Include="{}" />"#, shape.entry(h)));
    }
    lines.push("  </ItemGroup>".to_string());
    lines.push("  <ItemGroup>".to_string());
    for c in COMPILED {
        lines.push(format!(r#"    <ClCompile Include="{}" />"#, shape.entry(c)));
    }
    lines.push("  </ItemGroup>".to_string());
    lines.push(r#"  <Import Project="$(VCTargetsPath)\Microsoft.Cpp.targets" />"#.to_string());
    lines.push("</Project>".to_string());
    crlf(&lines)
}

/// A `.vcxproj.filters` filing every fixture source under its filter.
pub fn filters(shape: Shape) -> String {
    let mut groups: Vec<&str> = Vec::new();
    for f in COMPILED.iter().chain(HEADERS) {
        let group = shape.filter(f);
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    let mut lines: Vec<String> = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        r#"<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">"#.to_string(),
        "  <ItemGroup>".to_string(),
    ];
    for (i, group) in groups.iter().enumerate() {
        lines.push(format!(r#"    <Filter Include="{group}">"#));
        lines.push(format!(
            "      <UniqueIdentifier>{{00000000-0000-4000-8000-{:012x}}}</UniqueIdentifier>",
            i + 1
        ));
        lines.push("    </Filter>".to_string());
    }
    lines.push("  </ItemGroup>".to_string());

    for (tag, files) in [("ClCompile", COMPILED), ("ClInclude", HEADERS)] {
        lines.push("  <ItemGroup>".to_string());
        for f in files {
            lines.push(format!(r#"    <{tag} Include="{}">"#, shape.entry(f)));
            lines.push(format!("      <Filter>{}</Filter>", shape.filter(f)));
            lines.push(format!("    </{tag}>"));
        }
        lines.push("  </ItemGroup>".to_string());
    }
    lines.push("</Project>".to_string());
    crlf(&lines)
}

/// Split `X.Y.Z` for the version header.
///
/// # Panics
/// Panics if `version` is not three dot-separated parts.
fn split_version(version: &str) -> (&str, &str, &str) {
    let parts: Vec<&str> = version.split('.').collect();
    match parts.as_slice() {
        [major, minor, patch] => (*major, *minor, *patch),
        _ => panic!("fixture version must be X.Y.Z, got {version:?}"),
    }
}

/// `version.h` defining the four `LOGME_VERSION_*` macros.
pub fn version_header(version: &str) -> String {
    let (major, minor, patch) = split_version(version);
    crlf(&[
        "#pragma once".to_string(),
        String::new(),
        "// Generated at release time".to_string(),
        format!("#define LOGME_VERSION_MAJOR {major}"),
        format!("#define LOGME_VERSION_MINOR {minor}"),
        format!("#define LOGME_VERSION_PATCH {patch}"),
        format!("#define LOGME_VERSION_STRING \"{version}\""),
        String::new(),
        "#define LOGME_VERSION_NUMBER ((LOGME_VERSION_MAJOR << 16) | LOGME_VERSION_MINOR)".to_string(),
    ])
}

/// Top-level `CMakeLists.txt` declaring `version`.
pub fn build_config(version: &str) -> String {
    format!(
        "cmake_minimum_required(VERSION 3.16)\nproject(logme VERSION {version})\n\nset(CMAKE_CXX_STANDARD 17)\nadd_subdirectory(logme)\n"
    )
}

/// Changelog with a section for `version` and one older release.
pub fn changelog(version: &str) -> String {
    format!("# Changelog\n\n## {version}\n\n- Release notes\n\n## 0.0.1\n\n- Initial release\n")
}
