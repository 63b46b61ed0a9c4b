//! TOML configuration loading

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result, TextDocument};

/// Load a TOML file into `T`.
///
/// The file is decoded the same way manifests are, so a byte-order mark
/// written by an editor does not break parsing.
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let doc = TextDocument::load(path)?;
    toml::from_str(doc.text()).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        format: "TOML".into(),
        message: e.to_string(),
    })
}

/// Load a TOML file into `T` if it exists.
pub fn load_toml_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.is_file() {
        return Ok(None);
    }
    load_toml(path).map(Some)
}
