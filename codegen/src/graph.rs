//! In-memory RDF graph.
//!
//! The loader converts every parsed triple into owned [`Statement`]s held in a
//! sorted set. The set is built once and never mutated afterwards; because it
//! is ordered, every query below iterates in a deterministic order
//! (subject, then predicate, then object).

use std::collections::BTreeSet;

/// A literal object value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form of the literal.
    pub label: String,
    /// Language tag, if any (e.g. `"en"`).
    pub language: Option<String>,
    /// Datatype IRI, if the parser reported one.
    pub datatype: Option<String>,
}

impl Literal {
    /// Creates a plain literal with no language tag or datatype.
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language: None,
            datatype: None,
        }
    }

    /// Creates a language-tagged literal.
    #[cfg(test)]
    pub fn tagged(label: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }
}

/// A node in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// An IRI, stored in its full string form.
    Iri(String),
    /// A blank node, stored by its document-local identifier.
    Blank(String),
    /// A literal (only valid in object position).
    Literal(Literal),
}

impl Node {
    /// Shorthand for [`Node::Iri`].
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the IRI string if this node is an IRI.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this node is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// A single `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Statement {
    /// IRI or blank node.
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// IRI, blank node or literal.
    pub object: Node,
}

impl Statement {
    /// Creates a statement from its three parts.
    pub fn new(subject: Node, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// An immutable set of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    statements: BTreeSet<Statement>,
}

impl Graph {
    /// Number of distinct statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the graph holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Distinct IRI subjects, in byte order. Blank-node subjects are skipped.
    pub fn iri_subjects(&self) -> impl Iterator<Item = &str> {
        let mut last: Option<&str> = None;
        self.statements.iter().filter_map(move |st| {
            let iri = st.subject.as_iri()?;
            if last == Some(iri) {
                return None;
            }
            last = Some(iri);
            Some(iri)
        })
    }

    /// Objects of every statement matching `(subject, predicate, ?)`.
    ///
    /// Statements sort by subject then predicate, so the matches form one
    /// contiguous run starting at the smallest possible object.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        let start = Statement::new(Node::iri(subject), predicate, Node::Iri(String::new()));
        self.statements
            .range(start..)
            .take_while(move |st| st.subject.as_iri() == Some(subject) && st.predicate == predicate)
            .map(|st| &st.object)
    }

    /// Subjects of every statement matching `(?, predicate, object)`.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a Node,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.statements
            .iter()
            .filter(move |st| st.predicate == predicate && &st.object == object)
            .map(|st| &st.subject)
    }
}

impl FromIterator<Statement> for Graph {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        [
            Statement::new(
                Node::iri("http://ex.org/b"),
                "http://ex.org/p",
                Node::Literal(Literal::plain("B")),
            ),
            Statement::new(
                Node::iri("http://ex.org/a"),
                "http://ex.org/p",
                Node::iri("http://ex.org/b"),
            ),
            Statement::new(
                Node::iri("http://ex.org/a"),
                "http://ex.org/q",
                Node::Literal(Literal::plain("A")),
            ),
            Statement::new(
                Node::Blank("x".into()),
                "http://ex.org/p",
                Node::iri("http://ex.org/b"),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn duplicate_statements_collapse() {
        let st = Statement::new(Node::iri("s"), "p", Node::iri("o"));
        let graph: Graph = vec![st.clone(), st].into_iter().collect();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn iri_subjects_are_distinct_and_sorted() {
        let graph = sample();
        let subjects: Vec<&str> = graph.iri_subjects().collect();
        assert_eq!(subjects, vec!["http://ex.org/a", "http://ex.org/b"]);
    }

    #[test]
    fn objects_match_subject_and_predicate() {
        let graph = sample();
        let objs: Vec<&Node> = graph.objects("http://ex.org/a", "http://ex.org/p").collect();
        assert_eq!(objs, vec![&Node::iri("http://ex.org/b")]);
    }

    #[test]
    fn subjects_with_matches_predicate_and_object() {
        let graph = sample();
        let target = Node::iri("http://ex.org/b");
        let subs: Vec<&Node> = graph.subjects_with("http://ex.org/p", &target).collect();
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn objects_stop_at_the_next_predicate_and_subject() {
        let st = |s: Node, p: &str, o: Node| Statement::new(s, p, o);
        let graph: Graph = [
            st(Node::iri("http://ex.org/a"), "http://ex.org/p", Node::iri("http://ex.org/1")),
            st(Node::iri("http://ex.org/a"), "http://ex.org/p", Node::Literal(Literal::plain("2"))),
            st(Node::iri("http://ex.org/a"), "http://ex.org/pp", Node::iri("http://ex.org/3")),
            st(Node::iri("http://ex.org/a/"), "http://ex.org/p", Node::iri("http://ex.org/4")),
            st(Node::Blank("http://ex.org/a".into()), "http://ex.org/p", Node::iri("http://ex.org/5")),
        ]
        .into_iter()
        .collect();
        let objs: Vec<&Node> = graph.objects("http://ex.org/a", "http://ex.org/p").collect();
        assert_eq!(
            objs,
            vec![&Node::iri("http://ex.org/1"), &Node::Literal(Literal::plain("2"))]
        );
        assert_eq!(graph.objects("http://ex.org/b", "http://ex.org/p").count(), 0);
    }
}
