//! Shared test utilities for the release-prep workspace.
//!
//! This crate provides a standard logme-style source tree so every crate's
//! test suite starts from the same consistent state. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: manifest, filter, header and build-file texts
//! - [`tree`]: [`TestTree`] builder for temporary repositories

pub mod fixtures;
pub mod tree;

pub use tree::TestTree;
