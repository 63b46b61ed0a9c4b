//! Repository layout configuration
//!
//! Everything the engine needs to know about where files live comes from a
//! [`Layout`]. The defaults describe the logme tree; an optional
//! `release-prep.toml` at the repository root overrides any field:
//!
//! ```toml
//! project = "logme"
//! macro_prefix = "LOGME"
//!
//! [nested]
//! manifest = "dynamic/logmed.vcxproj"
//! filters = "dynamic/logmed.vcxproj.filters"
//! prefix = '..\logme\'
//! ```

mod layout;

pub use layout::{CONFIG_FILE, ClassifierKeywords, Layout, ProjectConfig};
