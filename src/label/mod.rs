//! Tab label computation.
//!
//! [`build_labels`] turns the group's ordered documents into an
//! index-aligned label vector; [`dedup`] shortens descriptions of
//! same-named documents to their minimum distinguishing path segments.
//! The whole vector is recomputed on any add, remove, rename or
//! configuration change — deduplication depends on the full working set, so
//! labels are never patched incrementally.

pub mod dedup;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::LabelFormat;
use crate::group::{Document, DocumentId};

/// Level of detail requested from a document's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Shortest form, typically the containing folder name
    Short,
    /// Workspace-relative path (default)
    #[default]
    Medium,
    /// Absolute path
    Long,
}

/// Display label of one open document, index-aligned with the host ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    /// Identity of the document this label describes
    pub doc: DocumentId,
    /// Display name
    pub name: String,
    /// Description, possibly shortened or cleared by deduplication
    pub description: String,
    /// Full title for the tab tooltip
    pub title: String,
}

/// Build the raw label vector at the given verbosity.
///
/// Pure function of its inputs: `name` and `title` come straight from the
/// document, `description` from the document evaluated at `verbosity`
/// (missing descriptions degrade to empty strings).
pub fn build_labels(docs: &[Rc<dyn Document>], verbosity: Verbosity) -> Vec<TabLabel> {
    docs.iter()
        .map(|doc| TabLabel {
            doc: doc.id(),
            name: doc.name(),
            description: doc.description(verbosity).unwrap_or_default(),
            title: doc.title(),
        })
        .collect()
}

/// Compute the full label set for a group under a label format.
///
/// Applies duplicate shortening when the format asks for it.
pub fn compute_labels(docs: &[Rc<dyn Document>], format: LabelFormat) -> Vec<TabLabel> {
    let mut labels = build_labels(docs, format.verbosity());
    if format.shorten_duplicates() {
        dedup::resolve_duplicates(&mut labels, docs);
    }
    labels
}

/// Truncate a label to `max_chars`, appending `…` when text was dropped.
pub fn truncate_plain(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return "…".to_string();
    }
    let mut chars = text.chars();
    let mut taken = String::new();
    for _ in 0..max_chars {
        if let Some(c) = chars.next() {
            taken.push(c);
        } else {
            return taken;
        }
    }
    if chars.next().is_some() {
        taken.pop();
        taken.push('…');
    }
    taken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_plain_handles_short_text() {
        assert_eq!(truncate_plain("abc", 5), "abc");
        assert_eq!(truncate_plain("abcdef", 5), "abcd…");
        assert_eq!(truncate_plain("abcdef", 0), "…");
    }
}
