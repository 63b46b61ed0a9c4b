//! Entry-block location
//!
//! An entry block is an `<ItemGroup>` whose entries are registrations of a
//! single tag:
//! ```text
//! <ItemGroup>
//!   <ClInclude Include="include\Logme\Logme.h" />
//! </ItemGroup>
//! ```
//! Blocks are found by pattern, not by parsing, so unrelated markup inside
//! or around them never has to be understood.

use crate::error::{Error, Result};
use crate::EntryTag;

/// Closing marker of every entry block.
pub const ITEM_GROUP_CLOSE: &str = "</ItemGroup>";

/// How the first entry must follow the `<ItemGroup>` opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpening {
    /// The entry is on the line right after `<ItemGroup>`.
    Adjacent,
    /// Other lines may sit between `<ItemGroup>` and the first entry.
    Spread,
}

/// Byte span of an entry block, closing tag included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryBlock {
    /// Offset of the `<ItemGroup>` opening.
    pub start: usize,
    /// Offset just past the `</ItemGroup>` closing.
    pub end: usize,
}

impl EntryBlock {
    /// Borrow the block's text out of the document it was located in.
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Locate the first entry block for `tag`.
///
/// The block ends at the first `</ItemGroup>` after the matched entry tag.
///
/// # Errors
/// [`Error::OpeningNotFound`] when no `<ItemGroup>` leads to a `tag` entry,
/// [`Error::ClosingNotFound`] when the group is never closed.
///
/// # Example
/// ```
/// use prep_blocks::{BlockOpening, EntryTag, locate_block};
///
/// let text = "<Project>\n<ItemGroup>\n  <ClInclude Include=\"a.h\" />\n</ItemGroup>\n</Project>";
/// let block = locate_block(text, EntryTag::ClInclude, BlockOpening::Adjacent).unwrap();
/// assert!(block.as_str(text).starts_with("<ItemGroup>"));
/// assert!(block.as_str(text).ends_with("</ItemGroup>"));
/// ```
pub fn locate_block(text: &str, tag: EntryTag, opening: BlockOpening) -> Result<EntryBlock> {
    let patterns = tag.patterns();
    let pattern = match opening {
        BlockOpening::Adjacent => &patterns.adjacent,
        BlockOpening::Spread => &patterns.spread,
    };

    let found = pattern
        .find(text)
        .ok_or(Error::OpeningNotFound { tag })?;

    let close_rel = text[found.end()..]
        .find(ITEM_GROUP_CLOSE)
        .ok_or(Error::ClosingNotFound { tag })?;
    let end = found.end() + close_rel + ITEM_GROUP_CLOSE.len();

    Ok(EntryBlock {
        start: found.start(),
        end,
    })
}
