//! Property tests for identifiers, classification and manifest editing

use prep_blocks::{EntryTag, extract_registered};
use prep_core::{ProjectShape, classify_path, ensure_entries_present, make_id};
use prep_fs::{ManifestPath, TextDocument};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,7}"
}

fn manifest(existing: &[String], newline: &str) -> String {
    let mut text = format!("<Project>{newline}  <ItemGroup>{newline}");
    for path in existing {
        text.push_str(&format!("    <ClCompile Include=\"{path}\" />{newline}"));
    }
    text.push_str(&format!("  </ItemGroup>{newline}</Project>{newline}"));
    text
}

proptest! {
    #[test]
    fn ids_are_deterministic_and_braced(ns in ".{0,16}", key in ".{0,32}") {
        let first = make_id(&ns, &key);
        prop_assert_eq!(&first, &make_id(&ns, &key));
        prop_assert_eq!(first.len(), 38);
        prop_assert!(first.starts_with('{') && first.ends_with('}'), "first line not wrapped in braces: {:?}", first);
        prop_assert_eq!(first.to_lowercase(), first.clone());
    }

    #[test]
    fn distinct_keys_give_distinct_ids(a in segment(), b in segment()) {
        prop_assume!(a != b);
        prop_assert_ne!(make_id("ns", &a), make_id("ns", &b));
    }

    #[test]
    fn classifier_is_total(parts in prop::collection::vec(segment(), 1..6), climb in any::<bool>()) {
        let mut raw = parts.join("\\");
        if climb {
            raw = format!("..\\{raw}");
        }
        let path = ManifestPath::new(&raw);
        for shape in [ProjectShape::Flat, ProjectShape::Nested] {
            let group = classify_path(&path, shape);
            prop_assert!(!group.is_empty());
            prop_assert!(!group.contains('/'));
        }
    }

    #[test]
    fn insertion_keeps_every_original_line(
        existing in prop::collection::btree_set(segment(), 1..6),
        added in prop::collection::btree_set(segment(), 0..6),
        crlf in any::<bool>(),
    ) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let existing: Vec<String> = existing.into_iter().map(|s| format!("{s}.cpp")).collect();
        let expected: Vec<ManifestPath> = existing
            .iter()
            .cloned()
            .chain(added.iter().map(|s| format!("new\\{s}.cpp")))
            .map(ManifestPath::new)
            .collect();

        let original = manifest(&existing, newline);
        let mut doc = TextDocument::from_bytes("p.vcxproj", original.as_bytes());
        let outcome = ensure_entries_present(&mut doc, "p.vcxproj", &expected, EntryTag::ClCompile);

        prop_assert_eq!(outcome.added, added.len());
        let registered = extract_registered(doc.text(), EntryTag::ClCompile);
        for path in &expected {
            prop_assert!(registered.contains(path.as_str()));
        }

        // Removing the inserted lines gives back the original text.
        let kept: String = doc
            .text()
            .split_inclusive('\n')
            .filter(|line| !line.contains("Include=\"new\\"))
            .collect();
        prop_assert_eq!(kept, original);

        // A second pass changes nothing.
        let before = doc.text().to_string();
        let again = ensure_entries_present(&mut doc, "p.vcxproj", &expected, EntryTag::ClCompile);
        prop_assert_eq!(again.added, 0);
        prop_assert_eq!(doc.text(), before.as_str());
    }
}
