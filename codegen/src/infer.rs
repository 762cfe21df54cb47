//! Default prefix and name inference.

use std::path::Path;

use crate::graph::{Graph, Node};
use crate::iris::{OWL_ONTOLOGY, RDF_TYPE};
use crate::mapping::capitalize;
use crate::vocabulary::VocabularySpec;

/// Infers the defaults for a vocabulary loaded from `source`.
#[must_use]
pub fn infer(graph: &Graph, source: &Path) -> VocabularySpec {
    VocabularySpec {
        name: infer_name(source),
        prefix: infer_prefix(graph),
        package: None,
    }
}

/// Returns the IRI of a subject typed `owl:Ontology`.
///
/// When several exist, the smallest IRI in byte order is chosen so the result
/// does not depend on parse order. Blank-node ontology subjects are ignored.
#[must_use]
pub fn infer_prefix(graph: &Graph) -> Option<String> {
    let ontology = Node::iri(OWL_ONTOLOGY);
    graph
        .subjects_with(RDF_TYPE, &ontology)
        .filter_map(Node::as_iri)
        .min()
        .map(str::to_string)
}

/// File stem with the first character upper-cased: `test.ttl` → `Test`.
///
/// Only the text after the last `.` is stripped, so `foaf.v1.rdf` → `Foaf.v1`.
/// A name that is all extension (`.hidden`) yields no default.
#[must_use]
pub fn infer_name(source: &Path) -> Option<String> {
    let file_name = source.file_name()?.to_str()?;
    let stem = match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    };
    if stem.is_empty() {
        return None;
    }
    Some(capitalize(stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Statement;

    fn typed(subject: Node, class: &str) -> Statement {
        Statement::new(subject, RDF_TYPE, Node::iri(class))
    }

    #[test]
    fn prefix_from_single_ontology_subject() {
        let graph: Graph = [
            typed(Node::iri("http://example.org/ns#"), OWL_ONTOLOGY),
            typed(
                Node::iri("http://example.org/ns#Thing"),
                "http://www.w3.org/2002/07/owl#Class",
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(infer_prefix(&graph).as_deref(), Some("http://example.org/ns#"));
    }

    #[test]
    fn prefix_tie_break_is_smallest_iri() {
        let graph: Graph = [
            typed(Node::iri("http://z.org/"), OWL_ONTOLOGY),
            typed(Node::iri("http://a.org/"), OWL_ONTOLOGY),
            typed(Node::Blank("o".into()), OWL_ONTOLOGY),
        ]
        .into_iter()
        .collect();
        assert_eq!(infer_prefix(&graph).as_deref(), Some("http://a.org/"));
    }

    #[test]
    fn no_ontology_subject_leaves_prefix_unset() {
        let graph: Graph = [typed(
            Node::iri("http://ex.org/Thing"),
            "http://www.w3.org/2002/07/owl#Class",
        )]
        .into_iter()
        .collect();
        assert_eq!(infer_prefix(&graph), None);
    }

    #[test]
    fn name_from_file_name() {
        assert_eq!(infer_name(Path::new("vocab/test.ttl")).as_deref(), Some("Test"));
        assert_eq!(infer_name(Path::new("ldp")).as_deref(), Some("Ldp"));
        assert_eq!(infer_name(Path::new("foaf.v1.rdf")).as_deref(), Some("Foaf.v1"));
        assert_eq!(infer_name(Path::new(".hidden")), None);
        assert_eq!(infer_name(Path::new("vocab.")).as_deref(), Some("Vocab"));
        assert_eq!(infer_name(Path::new("/")), None);
    }

    #[test]
    fn infer_combines_both() {
        let graph: Graph = [typed(Node::iri("http://example.org/ns#"), OWL_ONTOLOGY)]
            .into_iter()
            .collect();
        let spec = infer(&graph, Path::new("test.ttl"));
        assert_eq!(spec.name.as_deref(), Some("Test"));
        assert_eq!(spec.prefix.as_deref(), Some("http://example.org/ns#"));
        assert_eq!(spec.package, None);
    }
}
