//! Changelog section lookup. The changelog is only ever read.

use regex::Regex;

use crate::version::VersionTriple;
use crate::{Error, Result};

/// Whether `text` has a `## X.Y.Z` heading for `version`.
pub fn is_documented(text: &str, version: &VersionTriple) -> Result<bool> {
    let pattern = format!(
        r"(?m)^[ \t]*##[ \t]+{}[ \t]*\r?$",
        regex::escape(&version.to_string())
    );
    let re = Regex::new(&pattern).map_err(|e| Error::pattern("changelog heading", e))?;
    Ok(re.is_match(text))
}
