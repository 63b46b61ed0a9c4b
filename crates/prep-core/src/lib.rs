//! Reconciliation engine for Release Prep
//!
//! This crate sits on top of the Layer 0 crates and implements:
//!
//! - **Filter classification**: Infer the filter a new entry belongs to
//! - **Identifiers**: Reproducible `<UniqueIdentifier>` values for new filters
//! - **Manifest editing**: Insert missing entries and filter declarations
//! - **Version declarations**: Version header macros, CMake project version, changelog
//! - **ReleaseEngine**: Check and update operations over a whole repository
//!
//! # Architecture
//!
//! ```text
//!                release-prep CLI
//!                       |
//!                   prep-core
//!                       |
//!              +--------+--------+
//!              |                 |
//!           prep-fs         prep-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use prep_core::{ReleaseEngine, RunMode, VersionTriple};
//!
//! fn example() -> prep_core::Result<i32> {
//!     let version = VersionTriple::parse("2.4.10")?;
//!     let engine = ReleaseEngine::open(".", version)?;
//!     Ok(engine.run(RunMode::Check)?.exit_code())
//! }
//! ```

pub mod build_config;
pub mod changelog;
pub mod classify;
pub mod config;
pub mod editor;
pub mod error;
pub mod ident;
pub mod sync;
pub mod version;
pub mod version_header;

pub use build_config::VersionUpdate;
pub use classify::{Classifier, ProjectShape, classify_path};
pub use config::{CONFIG_FILE, ClassifierKeywords, Layout, ProjectConfig};
pub use editor::{
    EditOutcome, ensure_entries_present, ensure_grouped_entries_present, ensure_groups_declared,
    undeclared_groups,
};
pub use error::{Error, Result};
pub use ident::{IdGenerator, make_id};
pub use sync::{CheckReport, Issue, Outcome, ReleaseEngine, RunMode, SourceSet, UpdateReport};
pub use version::VersionTriple;
