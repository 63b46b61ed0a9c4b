//! Integration tests for entry-block splicing against realistic manifests.

use pretty_assertions::assert_eq;
use prep_blocks::{BlockOpening, EntryTag, Error, extract_registered, insert_into_block};
use rstest::rstest;

const FILTERS_LF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Filter Include="Backend">
      <UniqueIdentifier>{11111111-1111-1111-1111-111111111111}</UniqueIdentifier>
    </Filter>
  </ItemGroup>
  <ItemGroup>
    <ClInclude Include="include\Logme\Logme.h">
      <Filter>include\Logme</Filter>
    </ClInclude>
  </ItemGroup>
  <ItemGroup>
    <ClCompile Include="source\Backend\FileBackend.cpp">
      <Filter>Backend</Filter>
    </ClCompile>
  </ItemGroup>
</Project>
"#;

/// The fixture as Visual Studio writes it, with CRLF line endings.
fn filters() -> String {
    FILTERS_LF.replace('\n', "\r\n")
}

#[rstest]
#[case(EntryTag::Filter, BlockOpening::Adjacent, "Backend")]
#[case(EntryTag::ClInclude, BlockOpening::Adjacent, "Logme.h")]
#[case(EntryTag::ClCompile, BlockOpening::Spread, "FileBackend.cpp")]
fn test_insert_lands_in_matching_block(
    #[case] tag: EntryTag,
    #[case] opening: BlockOpening,
    #[case] neighbour: &str,
) {
    let insertion = format!("    <{} Include=\"NEW\" />\r\n", tag.name());
    let text = filters();
    let result = insert_into_block(&text, tag, opening, &insertion).unwrap();

    let inserted_at = result.find("Include=\"NEW\"").unwrap();
    let neighbour_at = result.find(neighbour).unwrap();
    assert!(neighbour_at < inserted_at);

    // Only the insertion was added; everything else is intact.
    assert_eq!(result.replacen(&insertion, "", 1), text);
    assert!(extract_registered(&result, tag).contains("NEW"));
}

#[test]
fn test_insert_keeps_closing_tag_indentation() {
    let result = insert_into_block(
        &filters(),
        EntryTag::ClCompile,
        BlockOpening::Spread,
        "    <ClCompile Include=\"source\\Logger.cpp\" />\r\n",
    )
    .unwrap();

    assert!(result.contains(
        "    </ClCompile>\r\n    <ClCompile Include=\"source\\Logger.cpp\" />\r\n  </ItemGroup>\r\n</Project>"
    ));
}

#[test]
fn test_missing_block_is_reported_not_panicked() {
    let text = "<Project>\r\n</Project>\r\n";
    let err = insert_into_block(text, EntryTag::ClInclude, BlockOpening::Adjacent, "x").unwrap_err();
    assert_eq!(err, Error::OpeningNotFound { tag: EntryTag::ClInclude });
    assert_eq!(err.to_string(), "Cannot find <ItemGroup> with <ClInclude> entries");
}

#[test]
fn test_registered_entries_in_filters_document() {
    let text = filters();
    let compiled = extract_registered(&text, EntryTag::ClCompile);
    let headers = extract_registered(&text, EntryTag::ClInclude);
    let declared = extract_registered(&text, EntryTag::Filter);

    assert_eq!(compiled.into_iter().collect::<Vec<_>>(), vec!["source\\Backend\\FileBackend.cpp"]);
    assert_eq!(headers.into_iter().collect::<Vec<_>>(), vec!["include\\Logme\\Logme.h"]);
    assert_eq!(declared.into_iter().collect::<Vec<_>>(), vec!["Backend"]);
}
