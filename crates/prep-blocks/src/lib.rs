//! Entry-block scanning and splicing for Release Prep.
//!
//! Visual Studio project and filter files are edited as text, never parsed
//! into a tree. This crate knows the handful of tag shapes that matter:
//!
//! ```text
//! <ItemGroup>
//!   <ClCompile Include="source\Logger.cpp" />
//! </ItemGroup>
//! ```
//!
//! - [`scanner`] lists the `Include` values already registered for a tag,
//!   and the filters that grouped entries refer to.
//! - [`parser`] locates the `<ItemGroup>` block that holds a tag's entries.
//! - [`writer`] splices new lines in front of that block's closing tag.
//!
//! Everything outside the spliced span is left byte-for-byte untouched.

pub mod error;
pub mod parser;
pub mod scanner;
pub mod tag;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{BlockOpening, EntryBlock, ITEM_GROUP_CLOSE, locate_block};
pub use scanner::{extract_group_references, extract_registered};
pub use tag::EntryTag;
pub use writer::{insert_before_closing, insert_into_block};
