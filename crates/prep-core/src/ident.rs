//! Deterministic group identifiers
//!
//! Filter declarations carry a `<UniqueIdentifier>`. Identifiers are derived
//! with UUID v5 (SHA-1 over a namespace and a name) instead of being random,
//! so two people running the same update produce identical manifests.

use uuid::Uuid;

/// Derive a brace-wrapped UUID from `namespace` and `key`.
///
/// # Example
/// ```
/// use prep_core::ident::make_id;
///
/// let id = make_id("logme-release-prep", "x");
/// assert_eq!(id, "{41beb530-a711-5145-a517-4c41890fffc1}");
/// ```
pub fn make_id(namespace: &str, key: &str) -> String {
    let name = format!("{namespace}:{key}");
    let id = Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes());
    format!("{{{}}}", id.hyphenated())
}

/// Identifier source bound to one namespace.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    namespace: String,
}

impl IdGenerator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Identifier for `group` declared in the document labelled `document`.
    pub fn group_id(&self, document: &str, group: &str) -> String {
        make_id(&self.namespace, &format!("{document}::{group}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_id_matches_known_value() {
        let ids = IdGenerator::new("logme-release-prep");
        assert_eq!(
            ids.group_id("dynamic/logmed.vcxproj.filters", "Widgets"),
            "{4e85f4f2-cae6-53a1-b026-287db50a49d7}"
        );
    }

    #[test]
    fn same_group_in_other_document_differs() {
        let ids = IdGenerator::new("logme-release-prep");
        assert_ne!(
            ids.group_id("logme/logme.vcxproj.filters", "Widgets"),
            ids.group_id("dynamic/logmed.vcxproj.filters", "Widgets")
        );
    }
}
