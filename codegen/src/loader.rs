//! Graph loader: reads a serialized RDF document into a [`Graph`].
//!
//! Parsing is delegated to the sophia parsers; each parsed triple is copied
//! into an owned [`Statement`] so the rest of the pipeline never deals with
//! parser lifetimes.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple;
use sophia_iri::Iri;
use sophia_turtle::parser::{nt, turtle::TurtleParser};
use sophia_xml::parser::RdfXmlParser;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Literal, Node, Statement};

/// Supported RDF syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Turtle 1.1.
    Turtle,
    /// Notation3. Read with the Turtle parser, so only its Turtle subset is accepted.
    N3,
    /// N-Triples.
    NTriples,
    /// RDF/XML.
    RdfXml,
}

impl Format {
    /// Resolves an explicit hint: a MIME type (parameters after `;` are
    /// ignored) or a short format name.
    #[must_use]
    pub fn from_hint(hint: &str) -> Option<Format> {
        let mime = hint.split(';').next().unwrap_or(hint).trim().to_ascii_lowercase();
        match mime.as_str() {
            "text/turtle" | "application/x-turtle" | "turtle" | "ttl" => Some(Format::Turtle),
            "text/n3" | "text/rdf+n3" | "n3" => Some(Format::N3),
            "application/n-triples" | "text/plain" | "ntriples" | "n-triples" | "nt" => {
                Some(Format::NTriples)
            }
            "application/rdf+xml" | "application/xml" | "text/xml" | "rdfxml" | "rdf/xml"
            | "rdf" | "xml" | "owl" => Some(Format::RdfXml),
            _ => None,
        }
    }

    /// Infers the syntax from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ttl" | "turtle" => Some(Format::Turtle),
            "n3" => Some(Format::N3),
            "nt" => Some(Format::NTriples),
            "rdf" | "owl" | "xml" => Some(Format::RdfXml),
            _ => None,
        }
    }

    /// Canonical MIME type.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Turtle => "text/turtle",
            Format::N3 => "text/n3",
            Format::NTriples => "application/n-triples",
            Format::RdfXml => "application/rdf+xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// Picks the syntax for `path`: the explicit hint wins, then the file extension.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] if the hint is not recognised, or if there
/// is no hint and the extension is not recognised.
pub fn resolve_format(path: &Path, hint: Option<&str>) -> Result<Format> {
    match hint {
        Some(hint) => Format::from_hint(hint).ok_or_else(|| Error::UnknownFormat(hint.to_string())),
        None => Format::from_path(path).ok_or_else(|| {
            Error::UnknownFormat(format!(
                "cannot infer a format from file name {}",
                path.display()
            ))
        }),
    }
}

/// Loads the RDF document at `path`.
///
/// `base` is used to resolve relative IRIs in the document.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if `path` does not exist,
/// [`Error::UnknownFormat`] if no syntax can be selected, [`Error::Io`] if the
/// file cannot be opened, and [`Error::Parse`] if the document is malformed.
pub fn load(path: &Path, hint: Option<&str>, base: Option<&str>) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let format = resolve_format(path, hint)?;
    debug!(path = %path.display(), %format, "loading vocabulary");

    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let graph = parse(BufReader::new(file), format, base).map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(statements = graph.len(), "graph loaded");
    Ok(graph)
}

/// Parses an in-memory document.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the document is malformed or `base` is not a
/// valid IRI.
pub fn parse_str(text: &str, format: Format, base: Option<&str>) -> Result<Graph> {
    parse(text.as_bytes(), format, base).map_err(|message| Error::Parse {
        path: PathBuf::from("<memory>"),
        message,
    })
}

fn parse<R: BufRead>(
    reader: R,
    format: Format,
    base: Option<&str>,
) -> std::result::Result<Graph, String> {
    let base = base
        .map(|b| Iri::new(b.to_string()).map_err(|e| format!("invalid base IRI {b:?}: {e}")))
        .transpose()?;

    let statements = match format {
        Format::Turtle | Format::N3 => collect(TurtleParser { base }.parse(reader)),
        Format::NTriples => collect(nt::parse_bufread(reader)),
        Format::RdfXml => collect(RdfXmlParser { base }.parse(reader)),
    }?;

    Ok(statements.into_iter().collect())
}

/// Drains a triple source. Triples that cannot appear in a plain RDF graph
/// (variables, quoted triples, literal subjects) are skipped.
fn collect<S: TripleSource>(mut source: S) -> std::result::Result<Vec<Statement>, String> {
    let mut statements = Vec::new();
    source.for_each_triple(|t| {
        let predicate = t.p().iri().map(|iri| iri.as_str().to_string());
        let (Some(subject), Some(predicate), Some(object)) =
            (to_node(t.s()), predicate, to_node(t.o()))
        else {
            return;
        };
        if matches!(subject, Node::Literal(_)) {
            return;
        }
        statements.push(Statement::new(subject, predicate, object));
    })
    .map_err(|e| e.to_string())?;
    Ok(statements)
}

fn to_node<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_string())),
        TermKind::Literal => {
            let label = term.lexical_form()?.to_string();
            let language = term.language_tag().map(|tag| tag.as_str().to_string());
            let datatype = if language.is_some() {
                None
            } else {
                term.datatype().map(|dt| dt.as_str().to_string())
            };
            Some(Node::Literal(Literal {
                label,
                language,
                datatype,
            }))
        }
        _ => None,
    }
}
