//! Manifest entry tags and their patterns

use regex::Regex;
use std::sync::LazyLock;

/// An element that registers a path through an `Include` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryTag {
    /// Compiled translation unit
    ClCompile,
    /// Header file
    ClInclude,
    /// Filter (group) declaration in a `.filters` document
    Filter,
}

/// Precompiled patterns for one tag.
pub(crate) struct TagPatterns {
    /// `<Tag ... Include="VALUE"`, capturing VALUE
    pub include: Regex,
    /// `<ItemGroup>` whose very next line is a `<Tag Include=` entry
    pub adjacent: Regex,
    /// `<ItemGroup>` followed, possibly after other lines, by a `<Tag Include=` entry
    pub spread: Regex,
}

impl TagPatterns {
    fn new(name: &str) -> Self {
        // Attributes may precede Include; the tag name itself must match exactly.
        let entry = format!(r#"<{}\s(?:[^>]*?\s)?Include\s*="#, regex::escape(name));
        Self {
            include: Regex::new(&format!(r#"{entry}\s*"([^"]+)""#))
                .expect("Invalid include regex"),
            adjacent: Regex::new(&format!(r"<ItemGroup>\s*(?:\r?\n|\r)\s*{entry}"))
                .expect("Invalid adjacent block regex"),
            spread: Regex::new(&format!(
                r"<ItemGroup>\s*(?:\r?\n|\r)(?:.*(?:\r?\n|\r))*?\s*{entry}"
            ))
            .expect("Invalid spread block regex"),
        }
    }
}

static CL_COMPILE: LazyLock<TagPatterns> = LazyLock::new(|| TagPatterns::new("ClCompile"));
static CL_INCLUDE: LazyLock<TagPatterns> = LazyLock::new(|| TagPatterns::new("ClInclude"));
static FILTER: LazyLock<TagPatterns> = LazyLock::new(|| TagPatterns::new("Filter"));

impl EntryTag {
    /// Element name as written in the manifest.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClCompile => "ClCompile",
            Self::ClInclude => "ClInclude",
            Self::Filter => "Filter",
        }
    }

    pub(crate) fn patterns(&self) -> &'static TagPatterns {
        match self {
            Self::ClCompile => &CL_COMPILE,
            Self::ClInclude => &CL_INCLUDE,
            Self::Filter => &FILTER,
        }
    }
}

impl std::fmt::Display for EntryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_pattern_requires_exact_tag_name() {
        let re = &EntryTag::ClCompile.patterns().include;
        assert!(re.is_match(r#"<ClCompile Include="a.cpp" />"#));
        assert!(!re.is_match(r#"<ClCompileX Include="a.cpp" />"#));
        assert!(!re.is_match(r#"<ClCompile XInclude="a.cpp" />"#));
    }

    #[test]
    fn spread_pattern_allows_intervening_lines() {
        let text = "<ItemGroup>\n  <!-- generated -->\n  <ClCompile Include=\"a.cpp\" />\n</ItemGroup>";
        assert!(EntryTag::ClCompile.patterns().spread.is_match(text));
        assert!(!EntryTag::ClCompile.patterns().adjacent.is_match(text));
    }
}
