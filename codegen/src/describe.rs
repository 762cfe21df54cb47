//! Description resolution and comment text shaping.

use crate::graph::Graph;
use crate::iris::{
    DCTERMS_DESCRIPTION, DCTERMS_TITLE, DC_DESCRIPTION, DC_TITLE, RDFS_COMMENT, RDFS_LABEL,
    SKOS_DEFINITION,
};

/// Predicates consulted for a term description, highest priority first.
pub const DESCRIPTION_PREDICATES: &[&str] = &[
    RDFS_COMMENT,
    DCTERMS_DESCRIPTION,
    DC_DESCRIPTION,
    SKOS_DEFINITION,
    RDFS_LABEL,
    DCTERMS_TITLE,
    DC_TITLE,
];

/// Column at which description text is wrapped.
pub const WRAP_WIDTH: usize = 70;

/// Resolves the description of `uri` using [`DESCRIPTION_PREDICATES`].
#[must_use]
pub fn resolve_description(graph: &Graph, uri: &str) -> Option<String> {
    resolve_with(graph, uri, DESCRIPTION_PREDICATES)
}

/// Returns the first non-blank literal found under `predicates`, tried in order.
///
/// Within one predicate the literal that sorts first is used.
#[must_use]
pub fn resolve_with(graph: &Graph, uri: &str, predicates: &[&str]) -> Option<String> {
    predicates.iter().find_map(|&predicate| {
        graph
            .objects(uri, predicate)
            .filter_map(|node| node.as_literal())
            .find(|lit| !lit.label.trim().is_empty())
            .map(|lit| lit.label.clone())
    })
}

/// Collapses every whitespace run to a single space and trims the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word-wraps `text` at `width` columns.
///
/// Lines break only at spaces; a word longer than `width` stays whole on its
/// own line.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
