//! Filesystem layer for Release Prep
//!
//! Loads manifest and header files as byte-faithful text documents, walks the
//! source tree, and renders paths the way Visual Studio manifests expect them.

pub mod config;
pub mod document;
pub mod error;
pub mod inventory;
pub mod io;
pub mod path;

pub use document::{NewlineStyle, TextDocument};
pub use error::{Error, Result};
pub use inventory::{SourceRole, collect_files};
pub use path::{MANIFEST_SEPARATOR, ManifestPath};
