//! Command implementations for prep-cli

pub mod release;

pub use release::{ReleaseArgs, run_release};
