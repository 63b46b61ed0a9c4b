//! Registered-entry scanning

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::EntryTag;

/// `<Filter>NAME</Filter>` membership child of a grouped entry, capturing NAME
static GROUP_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<Filter>\s*([^<]*?)\s*</Filter>").expect("Invalid group reference regex")
});

/// Collect every `Include` value registered with `tag`.
///
/// Self-closing and open elements are both recognized, and other attributes
/// may come before `Include`. Text that is not a `tag` element is ignored.
///
/// # Example
/// ```
/// use prep_blocks::{EntryTag, extract_registered};
///
/// let text = r#"<ItemGroup>
///     <ClCompile Include="source\Logger.cpp" />
///     <ClInclude Include="include\Logme\Logme.h" />
/// </ItemGroup>"#;
///
/// let found = extract_registered(text, EntryTag::ClCompile);
/// assert_eq!(found.len(), 1);
/// assert!(found.contains(r"source\Logger.cpp"));
/// ```
pub fn extract_registered(text: &str, tag: EntryTag) -> BTreeSet<String> {
    tag.patterns()
        .include
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collect every filter name that an entry claims membership of.
///
/// These are the `<Filter>` children of grouped entries, not the
/// `<Filter Include="...">` declarations. Empty names are skipped.
pub fn extract_group_references(text: &str) -> BTreeSet<String> {
    GROUP_REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches_is_empty() {
        assert!(extract_registered("<Project />", EntryTag::ClInclude).is_empty());
    }

    #[test]
    fn test_attribute_order_and_spacing() {
        let text = r#"
    <ClCompile Include="a.cpp" />
    <ClCompile
        Condition="'$(Configuration)'=='Debug'"  Include = "b.cpp">
    </ClCompile>
    <ClCompile Include="c.cpp"><Filter>x</Filter></ClCompile>
"#;
        let found = extract_registered(text, EntryTag::ClCompile);
        let found: Vec<&str> = found.iter().map(String::as_str).collect();
        assert_eq!(found, vec!["a.cpp", "b.cpp", "c.cpp"]);
    }

    #[test]
    fn test_filter_declarations_are_not_entries() {
        let text = r#"<Filter Include="Backend"><UniqueIdentifier>{x}</UniqueIdentifier></Filter>
<ClCompile Include="a.cpp"><Filter>Backend</Filter></ClCompile>"#;
        let filters = extract_registered(text, EntryTag::Filter);
        assert_eq!(filters.len(), 1);
        assert!(filters.contains("Backend"));
    }

    #[test]
    fn test_group_references_skip_declarations() {
        let text = "<Filter Include=\"Backend\">\r\n  <UniqueIdentifier>{x}</UniqueIdentifier>\r\n</Filter>\r\n<ClCompile Include=\"a.cpp\">\r\n  <Filter>Backend</Filter>\r\n</ClCompile>\r\n<ClInclude Include=\"a.h\">\r\n  <Filter> Control\\Command </Filter>\r\n</ClInclude>\r\n<ClInclude Include=\"b.h\"><Filter></Filter></ClInclude>\r\n";
        let found = extract_group_references(text);
        let found: Vec<&str> = found.iter().map(String::as_str).collect();
        assert_eq!(found, vec!["Backend", "Control\\Command"]);
    }
}
