//! Splicing new entries into entry blocks

use crate::error::{Error, Result};
use crate::parser::{BlockOpening, ITEM_GROUP_CLOSE, locate_block};
use crate::EntryTag;

/// Insert `insertion` in front of the last `closing` in `block`.
///
/// When the closing tag sits on its own line, the insertion goes before that
/// line's indentation so the closing tag keeps its original indent. Returns
/// `None` when `block` does not contain `closing`.
///
/// # Example
/// ```
/// use prep_blocks::insert_before_closing;
///
/// let block = "<ItemGroup>\n    <ClCompile Include=\"a.cpp\" />\n  </ItemGroup>";
/// let result = insert_before_closing(block, "    <ClCompile Include=\"b.cpp\" />\n", "</ItemGroup>").unwrap();
/// assert!(result.ends_with("    <ClCompile Include=\"b.cpp\" />\n  </ItemGroup>"));
/// ```
pub fn insert_before_closing(block: &str, insertion: &str, closing: &str) -> Option<String> {
    let idx = insertion_point(block, block.rfind(closing)?);
    let mut out = String::with_capacity(block.len() + insertion.len());
    out.push_str(&block[..idx]);
    out.push_str(insertion);
    out.push_str(&block[idx..]);
    Some(out)
}

/// Move `closing_at` back over the closing tag's indentation, but only when
/// nothing but spaces and tabs precede it on its line.
fn insertion_point(block: &str, closing_at: usize) -> usize {
    let line = &block[..closing_at];
    let indent_start = line.trim_end_matches([' ', '\t']).len();
    if indent_start == 0 || line[..indent_start].ends_with('\n') {
        indent_start
    } else {
        closing_at
    }
}

/// Locate the entry block for `tag` and insert `insertion` before its
/// closing `</ItemGroup>`.
///
/// Returns the full new text; `text` itself is not touched.
///
/// # Errors
/// Propagates the location errors of [`locate_block`].
pub fn insert_into_block(
    text: &str,
    tag: EntryTag,
    opening: BlockOpening,
    insertion: &str,
) -> Result<String> {
    let block = locate_block(text, tag, opening)?;
    let spliced = insert_before_closing(block.as_str(text), insertion, ITEM_GROUP_CLOSE)
        .ok_or(Error::InsertFailed { tag })?;

    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..block.start]);
    out.push_str(&spliced);
    out.push_str(&text[block.end..]);

    tracing::debug!(%tag, start = block.start, end = block.end, "spliced into entry block");
    Ok(out)
}
