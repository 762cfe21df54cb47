//! Target-language renderers.
//!
//! Each renderer turns a finalized [`Vocabulary`] into the complete text of
//! one source file. Renderers are pure; writing the file is left to
//! [`crate::emit::write_file`].

pub mod java;
pub mod rust;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::describe::{normalize_whitespace, wrap, WRAP_WIDTH};
use crate::error::{Error, Result};
use crate::extract::TermEntry;

/// Language of the generated source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// A self-contained Rust module of `const` terms.
    #[default]
    Rust,
    /// A Java class of Sesame `URI` constants.
    Java,
}

impl Language {
    /// File extension of generated files, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Language::Rust => "rs",
            Language::Java => "java",
        }
    }

    /// Renders `vocab` as source text in this language.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if two term keys map to the same
    /// identifier in this language.
    pub fn render(self, vocab: &Vocabulary<'_>) -> Result<String> {
        match self {
            Language::Rust => rust::render(vocab),
            Language::Java => java::render(vocab),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Rust => "rust",
            Language::Java => "java",
        })
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rust" | "rs" => Ok(Language::Rust),
            "java" => Ok(Language::Java),
            other => Err(Error::Generation(format!("unsupported target language: {other}"))),
        }
    }
}

/// Everything a renderer needs, fully resolved.
#[derive(Debug, Clone)]
pub struct Vocabulary<'a> {
    /// Vocabulary display name.
    pub name: &'a str,
    /// Namespace IRI.
    pub prefix: &'a str,
    /// Optional package or module path.
    pub package: Option<&'a str>,
    /// Name of the generated type, taken from the output file stem.
    pub type_name: &'a str,
    /// Terms in emission order.
    pub terms: Vec<&'a TermEntry>,
}

/// Normalized, wrapped description lines of a term (empty if it has none).
pub(crate) fn description_lines(term: &TermEntry) -> Vec<String> {
    term.description
        .as_deref()
        .map(|d| wrap(&normalize_whitespace(d), WRAP_WIDTH))
        .unwrap_or_default()
}

/// Maps every term to an identifier, rejecting two terms that end up with
/// the same one.
pub(crate) fn assign_identifiers<'a>(
    terms: &[&'a TermEntry],
    reserved: &[&str],
    to_ident: impl Fn(&str) -> String,
) -> Result<Vec<(String, &'a TermEntry)>> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut out = Vec::with_capacity(terms.len());
    for &term in terms {
        let mut ident = to_ident(&term.key);
        if reserved.contains(&ident.as_str()) {
            ident.push('_');
        }
        if let Some(other) = seen.insert(ident.clone(), &term.uri) {
            return Err(Error::Generation(format!(
                "terms <{other}> and <{}> both map to identifier `{ident}`",
                term.uri
            )));
        }
        out.push((ident, term));
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn term(key: &str, local_part: &str, description: Option<&str>) -> TermEntry {
        TermEntry {
            key: key.to_string(),
            uri: format!("http://example.org/ns#{local_part}"),
            local_part: local_part.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn language_parsing() {
        assert_eq!("Rust".parse::<Language>().unwrap(), Language::Rust);
        assert_eq!("java".parse::<Language>().unwrap(), Language::Java);
        assert!("kotlin".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Rust);
        assert_eq!(Language::Java.extension(), "java");
    }

    #[test]
    fn description_lines_are_normalized_and_wrapped() {
        let long = "word ".repeat(30);
        let t = term("x", "x", Some(&long));
        let lines = description_lines(&t);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= WRAP_WIDTH));
        assert!(description_lines(&term("y", "y", None)).is_empty());
    }

    #[test]
    fn identifier_clash_is_rejected() {
        let a = term("a_b", "a_b", None);
        let b = term("a/b", "a/b", None);
        let err = assign_identifiers(&[&a, &b], &[], crate::mapping::to_rust_ident).unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[test]
    fn reserved_identifiers_get_a_suffix() {
        let a = term("NAMESPACE", "NAMESPACE", None);
        let idents = assign_identifiers(&[&a], &["NAMESPACE"], crate::mapping::to_rust_ident)
            .unwrap();
        assert_eq!(idents[0].0, "NAMESPACE_");
    }
}
