//! `#define`-based version header
//!
//! The header carries four macros for one prefix:
//! ```c
//! #define LOGME_VERSION_MAJOR 2
//! #define LOGME_VERSION_MINOR 4
//! #define LOGME_VERSION_PATCH 10
//! #define LOGME_VERSION_STRING "2.4.10"
//! ```
//! Only the value token of a definition is ever rewritten.

use prep_fs::TextDocument;
use regex::Regex;

use crate::version::VersionTriple;
use crate::{Error, Result};

/// One macro and the value it should carry.
struct MacroValue {
    name: String,
    value: String,
}

fn expected_macros(prefix: &str, version: &VersionTriple) -> [MacroValue; 4] {
    let m = |suffix: &str, value: String| MacroValue {
        name: format!("{prefix}_VERSION_{suffix}"),
        value,
    };
    [
        m("MAJOR", version.major.to_string()),
        m("MINOR", version.minor.to_string()),
        m("PATCH", version.patch.to_string()),
        m("STRING", format!("\"{version}\"")),
    ]
}

/// Line-anchored `#define NAME VALUE`, capturing VALUE.
fn definition_pattern(name: &str) -> Result<Regex> {
    let pattern = format!(
        r#"(?m)^[ \t]*#define[ \t]+{}[ \t]+([0-9]+|"[^"\r\n]*")[ \t]*\r?$"#,
        regex::escape(name)
    );
    Regex::new(&pattern).map_err(|e| Error::pattern(name, e))
}

/// Whether all four macros are defined with the values of `version`.
pub fn version_matches(text: &str, prefix: &str, version: &VersionTriple) -> Result<bool> {
    for expected in expected_macros(prefix, version) {
        let re = definition_pattern(&expected.name)?;
        let found = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .is_some_and(|v| v.as_str() == expected.value);
        if !found {
            tracing::debug!(name = %expected.name, "version macro missing or stale");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Names of the macros that have no definition at all.
pub fn missing_macros(text: &str, prefix: &str) -> Result<Vec<String>> {
    let placeholder = VersionTriple::new(0, 0, 0);
    let mut missing = Vec::new();
    for expected in expected_macros(prefix, &placeholder) {
        if !definition_pattern(&expected.name)?.is_match(text) {
            missing.push(expected.name);
        }
    }
    Ok(missing)
}

/// Rewrite every definition whose value differs from `version`.
///
/// Undefined macros are skipped. Returns whether the document changed.
pub fn sync_version(doc: &mut TextDocument, prefix: &str, version: &VersionTriple) -> Result<bool> {
    let mut text = doc.text().to_string();
    let mut changed = false;

    for expected in expected_macros(prefix, version) {
        let re = definition_pattern(&expected.name)?;
        let Some(span) = re.captures(&text).and_then(|caps| caps.get(1)) else {
            continue;
        };
        if span.as_str() == expected.value {
            continue;
        }
        tracing::debug!(
            name = %expected.name,
            from = span.as_str(),
            to = %expected.value,
            "rewriting version macro"
        );
        text.replace_range(span.range(), &expected.value);
        changed = true;
    }

    if changed {
        doc.set_text(text);
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#pragma once\n\n#define LOGME_VERSION_MAJOR 2\n#define LOGME_VERSION_MINOR 4\n#define LOGME_VERSION_PATCH 10\n#define LOGME_VERSION_STRING \"2.4.10\"\n";

    #[test]
    fn matches_current_version() {
        assert!(version_matches(HEADER, "LOGME", &VersionTriple::new(2, 4, 10)).unwrap());
        assert!(!version_matches(HEADER, "LOGME", &VersionTriple::new(2, 4, 11)).unwrap());
        assert!(!version_matches(HEADER, "OTHER", &VersionTriple::new(2, 4, 10)).unwrap());
    }

    #[test]
    fn indented_definitions_match() {
        let text = "  #define X_VERSION_MAJOR 1\n\t#define X_VERSION_MINOR 0\n#define X_VERSION_PATCH 0 \n#define X_VERSION_STRING \"1.0.0\"\r\n";
        assert!(version_matches(text, "X", &VersionTriple::new(1, 0, 0)).unwrap());
    }

    #[test]
    fn sync_rewrites_only_values() {
        let crlf = HEADER.replace('\n', "\r\n");
        let mut doc = TextDocument::from_bytes("version.h", crlf.as_bytes());

        assert!(sync_version(&mut doc, "LOGME", &VersionTriple::new(3, 0, 0)).unwrap());
        assert_eq!(
            doc.text(),
            "#pragma once\r\n\r\n#define LOGME_VERSION_MAJOR 3\r\n#define LOGME_VERSION_MINOR 0\r\n#define LOGME_VERSION_PATCH 0\r\n#define LOGME_VERSION_STRING \"3.0.0\"\r\n"
        );
    }

    #[test]
    fn sync_is_noop_when_current() {
        let mut doc = TextDocument::from_bytes("version.h", HEADER.as_bytes());
        assert!(!sync_version(&mut doc, "LOGME", &VersionTriple::new(2, 4, 10)).unwrap());
        assert!(!doc.is_modified());
    }

    #[test]
    fn reports_undefined_macros() {
        let text = "#define LOGME_VERSION_MAJOR 2\n";
        assert_eq!(
            missing_macros(text, "LOGME").unwrap(),
            vec![
                "LOGME_VERSION_MINOR".to_string(),
                "LOGME_VERSION_PATCH".to_string(),
                "LOGME_VERSION_STRING".to_string(),
            ]
        );
    }
}
