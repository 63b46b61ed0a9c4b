//! Manifest editing
//!
//! Adds missing registrations to `.vcxproj` and `.vcxproj.filters`
//! documents. Every operation diffs the expected paths against what the
//! document already registers and only ever inserts, so running it again on
//! its own output changes nothing.

use std::collections::HashSet;

use prep_blocks::{
    BlockOpening, EntryTag, extract_group_references, extract_registered, insert_into_block,
};
use prep_fs::{ManifestPath, TextDocument};

use crate::classify::Classifier;
use crate::ident::IdGenerator;

/// Indentation of an entry inside its `<ItemGroup>`.
const ENTRY_INDENT: &str = "    ";
/// Indentation of an entry's child element.
const CHILD_INDENT: &str = "      ";

/// What an editing operation did to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Number of elements inserted
    pub added: usize,
    /// One line per successful insertion batch
    pub changes: Vec<String>,
    /// Blocks that could not be located; those insertions were skipped
    pub diagnostics: Vec<String>,
}

impl EditOutcome {
    /// Whether any insertion succeeded.
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }

    fn merge(&mut self, other: EditOutcome) {
        self.added += other.added;
        self.changes.extend(other.changes);
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Paths from `expected` that `text` does not register with `tag`, in order.
pub fn missing_entries(text: &str, expected: &[ManifestPath], tag: EntryTag) -> Vec<ManifestPath> {
    let present = extract_registered(text, tag);
    expected
        .iter()
        .filter(|p| !present.contains(p.as_str()))
        .cloned()
        .collect()
}

/// Filters that entries in `text` are filed under but that `text` never
/// declares, sorted by name.
pub fn undeclared_groups(text: &str) -> Vec<String> {
    let declared = extract_registered(text, EntryTag::Filter);
    extract_group_references(text)
        .into_iter()
        .filter(|g| !declared.contains(g))
        .collect()
}

/// Noun used in change messages for a batch of `tag` entries.
fn entry_noun(tag: EntryTag) -> &'static str {
    match tag {
        EntryTag::ClCompile => ".cpp entries",
        EntryTag::ClInclude => "header entries",
        EntryTag::Filter => "filter definitions",
    }
}

/// Opening shape of the block holding `tag` entries.
///
/// Compiled sources are often preceded by other lines in their group, so
/// that block is matched loosely.
fn opening_for(tag: EntryTag) -> BlockOpening {
    match tag {
        EntryTag::ClCompile => BlockOpening::Spread,
        EntryTag::ClInclude | EntryTag::Filter => BlockOpening::Adjacent,
    }
}

/// Splice `insertion` into the `tag` block of `doc` and record the result.
fn apply(
    doc: &mut TextDocument,
    label: &str,
    tag: EntryTag,
    insertion: &str,
    count: usize,
    outcome: &mut EditOutcome,
) {
    match insert_into_block(doc.text(), tag, opening_for(tag), insertion) {
        Ok(text) => {
            doc.set_text(text);
            outcome.added += count;
            outcome
                .changes
                .push(format!("{label}: added {count} {}", entry_noun(tag)));
        }
        Err(e) => {
            tracing::warn!(document = label, error = %e, "entry block not found");
            outcome.diagnostics.push(format!("{label}: {e}"));
        }
    }
}

/// Register every path in `expected` with a self-closing `tag` element.
///
/// `label` names the document in messages.
pub fn ensure_entries_present(
    doc: &mut TextDocument,
    label: &str,
    expected: &[ManifestPath],
    tag: EntryTag,
) -> EditOutcome {
    let mut outcome = EditOutcome::default();
    let missing = missing_entries(doc.text(), expected, tag);
    if missing.is_empty() {
        tracing::debug!(document = label, %tag, "no entries missing");
        return outcome;
    }

    let nl = doc.newline().as_str();
    let insertion: String = missing
        .iter()
        .map(|path| format!("{ENTRY_INDENT}<{tag} Include=\"{path}\" />{nl}"))
        .collect();

    apply(doc, label, tag, &insertion, missing.len(), &mut outcome);
    outcome
}

/// Declare every filter in `needed` that the document does not declare yet.
pub fn ensure_groups_declared(
    doc: &mut TextDocument,
    label: &str,
    needed: &[String],
    ids: &IdGenerator,
) -> EditOutcome {
    let mut outcome = EditOutcome::default();
    let present = extract_registered(doc.text(), EntryTag::Filter);
    let missing: Vec<&String> = needed.iter().filter(|g| !present.contains(*g)).collect();
    if missing.is_empty() {
        return outcome;
    }

    let nl = doc.newline().as_str();
    let mut insertion = String::new();
    for group in &missing {
        let id = ids.group_id(label, group);
        insertion.push_str(&format!("{ENTRY_INDENT}<Filter Include=\"{group}\">{nl}"));
        insertion.push_str(&format!(
            "{CHILD_INDENT}<UniqueIdentifier>{id}</UniqueIdentifier>{nl}"
        ));
        insertion.push_str(&format!("{ENTRY_INDENT}</Filter>{nl}"));
    }

    apply(doc, label, EntryTag::Filter, &insertion, missing.len(), &mut outcome);
    outcome
}

/// Register missing compiled sources and headers in a filter document,
/// each under its inferred filter, declaring new filters first.
///
/// Filters that existing entries already refer to but that lack a
/// declaration are declared in the same pass, ahead of the new ones.
/// Headers are inserted before compiled sources. Each insertion locates its
/// block in the text produced by the previous one.
pub fn ensure_grouped_entries_present(
    doc: &mut TextDocument,
    label: &str,
    expected_compiled: &[ManifestPath],
    expected_headers: &[ManifestPath],
    classifier: &Classifier,
    ids: &IdGenerator,
) -> EditOutcome {
    let mut outcome = EditOutcome::default();
    let missing_compiled = missing_entries(doc.text(), expected_compiled, EntryTag::ClCompile);
    let missing_headers = missing_entries(doc.text(), expected_headers, EntryTag::ClInclude);
    let undeclared = undeclared_groups(doc.text());
    if missing_compiled.is_empty() && missing_headers.is_empty() && undeclared.is_empty() {
        tracing::debug!(document = label, shape = %classifier.shape(), "no grouped entries missing");
        return outcome;
    }

    let mut seen = HashSet::new();
    let needed: Vec<String> = undeclared
        .into_iter()
        .chain(
            missing_compiled
                .iter()
                .chain(&missing_headers)
                .map(|p| classifier.classify(p)),
        )
        .filter(|g| seen.insert(g.clone()))
        .collect();
    outcome.merge(ensure_groups_declared(doc, label, &needed, ids));

    for (tag, missing) in [
        (EntryTag::ClInclude, &missing_headers),
        (EntryTag::ClCompile, &missing_compiled),
    ] {
        if missing.is_empty() {
            continue;
        }
        let insertion = grouped_insertion(doc, tag, missing, classifier);
        apply(doc, label, tag, &insertion, missing.len(), &mut outcome);
    }

    outcome
}

fn grouped_insertion(
    doc: &TextDocument,
    tag: EntryTag,
    paths: &[ManifestPath],
    classifier: &Classifier,
) -> String {
    let nl = doc.newline().as_str();
    let mut insertion = String::new();
    for path in paths {
        let group = classifier.classify(path);
        insertion.push_str(&format!("{ENTRY_INDENT}<{tag} Include=\"{path}\">{nl}"));
        insertion.push_str(&format!("{CHILD_INDENT}<Filter>{group}</Filter>{nl}"));
        insertion.push_str(&format!("{ENTRY_INDENT}</{tag}>{nl}"));
    }
    insertion
}
