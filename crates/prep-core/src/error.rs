//! Error types for prep-core

/// Result type for prep-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prep-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The release version argument is not `X.Y.Z`
    #[error("Invalid version '{input}', expected X.Y.Z")]
    InvalidVersion { input: String },

    /// A pattern built from configuration failed to compile
    #[error("Invalid pattern for {what}: {source}")]
    Pattern {
        what: String,
        #[source]
        source: regex::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from prep-fs
    #[error(transparent)]
    Fs(#[from] prep_fs::Error),
}

impl Error {
    pub(crate) fn pattern(what: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            what: what.into(),
            source,
        }
    }
}
