//! Error types for prep-blocks

use crate::EntryTag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot find <ItemGroup> with <{tag}> entries")]
    OpeningNotFound { tag: EntryTag },

    #[error("Cannot find closing </ItemGroup> for {tag} group")]
    ClosingNotFound { tag: EntryTag },

    #[error("Failed to insert {tag} entries")]
    InsertFailed { tag: EntryTag },
}
