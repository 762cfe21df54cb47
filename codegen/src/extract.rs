//! Term extraction: partitions subject IRIs into local names under a prefix.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::graph::Graph;
use crate::mapping::clean_key;

/// One vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    /// Sanitized local name; unique within a [`TermTable`].
    pub key: String,
    /// Full subject IRI.
    pub uri: String,
    /// The IRI minus the prefix, before sanitization.
    pub local_part: String,
    /// Resolved description, filled in just before emission.
    pub description: Option<String>,
}

/// Two IRIs that sanitized to the same key; `kept` won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    /// The shared key.
    pub key: String,
    /// IRI that ended up in the table.
    pub kept: String,
    /// IRI that was overwritten.
    pub dropped: String,
}

/// Terms of a vocabulary keyed by sanitized local name.
#[derive(Debug, Clone, Default)]
pub struct TermTable {
    entries: HashMap<String, TermEntry>,
    collisions: Vec<KeyCollision>,
}

impl TermTable {
    /// Inserts a term. A previous entry with the same key is replaced and
    /// recorded as a collision.
    pub fn insert(&mut self, entry: TermEntry) {
        let key = entry.key.clone();
        let kept = entry.uri.clone();
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            if previous.uri != kept {
                self.collisions.push(KeyCollision {
                    key,
                    kept,
                    dropped: previous.uri,
                });
            }
        }
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no term matched the prefix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a term by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TermEntry> {
        self.entries.get(key)
    }

    /// Collisions resolved while building the table, in insertion order.
    #[must_use]
    pub fn collisions(&self) -> &[KeyCollision] {
        &self.collisions
    }

    /// Terms in emission order: case-insensitive ascending by key, ties broken
    /// by byte order so the order is total.
    #[must_use]
    pub fn sorted(&self) -> Vec<&TermEntry> {
        let mut terms: Vec<&TermEntry> = self.entries.values().collect();
        terms.sort_by(|a, b| compare_keys(&a.key, &b.key));
        terms
    }

    /// Mutable access to every entry, in no particular order.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut TermEntry> {
        self.entries.values_mut()
    }
}

/// Case-insensitive key order with a byte-order tie break.
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Builds the term table for every IRI subject starting with `prefix`.
///
/// Subjects are visited in byte order, so when two IRIs sanitize to the same
/// key the later one wins deterministically.
#[must_use]
pub fn extract_terms(graph: &Graph, prefix: &str) -> TermTable {
    let mut table = TermTable::default();
    for uri in graph.iri_subjects() {
        let Some(local_part) = uri.strip_prefix(prefix) else {
            continue;
        };
        if local_part.is_empty() {
            continue;
        }
        table.insert(TermEntry {
            key: clean_key(local_part),
            uri: uri.to_string(),
            local_part: local_part.to_string(),
            description: None,
        });
    }
    table
}
