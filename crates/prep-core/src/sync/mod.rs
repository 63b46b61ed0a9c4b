//! Release reconciliation
//!
//! This module provides:
//! - **sources**: Discover the entries every project description should have
//! - **check**: Issue types for read-only consistency checks
//! - **engine**: Validate, check and update a repository

mod check;
mod engine;
mod sources;

pub use check::{CheckReport, Issue};
pub use engine::{Outcome, ReleaseEngine, RunMode, UpdateReport};
pub use sources::SourceSet;
