//! Property tests for key sanitization and term ordering.

use proptest::prelude::*;
use vocabgen_codegen::extract::{compare_keys, extract_terms};
use vocabgen_codegen::mapping::clean_key;
use vocabgen_codegen::{Graph, Node, Statement};

const PREFIX: &str = "http://example.org/ns#";

fn graph_of(locals: &[String]) -> Graph {
    locals
        .iter()
        .map(|l| {
            Statement::new(
                Node::iri(format!("{PREFIX}{l}")),
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                Node::iri("http://www.w3.org/2002/07/owl#Class"),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn clean_key_is_idempotent(s in ".*") {
        let once = clean_key(&s);
        prop_assert_eq!(clean_key(&once), once.clone());
        prop_assert!(!once.contains('#') && !once.contains('.') && !once.contains('-'));
    }

    #[test]
    fn emitted_keys_are_unique_and_sorted(locals in prop::collection::vec("[A-Za-z][A-Za-z0-9.#-]{0,8}", 0..24)) {
        let table = extract_terms(&graph_of(&locals), PREFIX);
        let keys: Vec<&str> = table.sorted().iter().map(|t| t.key.as_str()).collect();

        let mut unique = keys.clone();
        unique.dedup();
        prop_assert_eq!(unique.len(), keys.len());

        for pair in keys.windows(2) {
            prop_assert!(pair[0].to_lowercase() <= pair[1].to_lowercase());
            prop_assert_eq!(compare_keys(pair[0], pair[1]), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn every_term_round_trips(locals in prop::collection::vec("[a-z][a-z0-9_-]{0,8}", 1..16)) {
        let table = extract_terms(&graph_of(&locals), PREFIX);
        for term in table.sorted() {
            prop_assert_eq!(format!("{PREFIX}{}", term.local_part), term.uri.clone());
            prop_assert_eq!(clean_key(&term.local_part), term.key.clone());
        }
    }
}
