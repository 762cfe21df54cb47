//! Rust renderer.
//!
//! The generated file is a self-contained module: it declares a small `Term`
//! type, the `NAMESPACE` and `PREFIX` constants, one `const` per term and a
//! `TERMS` slice listing them all. Each term constant is built from
//! `NAMESPACE` and the term's original local part, so
//! `format!("{}{}", NAMESPACE, local_part)` is exactly the source IRI.

use super::{assign_identifiers, description_lines, Vocabulary};
use crate::emit::SourceFile;
use crate::error::Result;
use crate::mapping::{rust_module_path, to_rust_ident};

/// Names the generated module already uses.
const RESERVED: &[&str] = &["NAMESPACE", "PREFIX", "TERMS"];

/// Renders `vocab` as a Rust module.
///
/// # Errors
///
/// Returns an error if two term keys map to the same Rust identifier.
pub fn render(vocab: &Vocabulary<'_>) -> Result<String> {
    let terms = assign_identifiers(&vocab.terms, RESERVED, to_rust_ident)?;
    let mut f = SourceFile::new("    ");

    f.line(&format!("//! Namespace {}.", vocab.name));
    f.line("//!");
    f.line(&format!(
        "//! Generated by vocabgen from `{}`. Do not edit by hand.",
        vocab.prefix
    ));
    f.blank();
    f.line("#![allow(non_upper_case_globals)]");
    f.blank();

    let modules = vocab.package.map(rust_module_path).unwrap_or_default();
    for module in &modules {
        f.line(&format!("pub mod {module} {{"));
        f.indent();
    }

    f.line("use core::fmt;");
    f.blank();

    f.line(&format!("/// `{}`", vocab.prefix));
    f.line(&format!("pub const NAMESPACE: &str = {:?};", vocab.prefix));
    f.blank();
    let lower = vocab.name.to_lowercase();
    f.line(&format!("/// `{lower}`"));
    f.line(&format!("pub const PREFIX: &str = {lower:?};"));
    f.blank();

    write_term_type(&mut f, vocab.name);

    for (ident, term) in &terms {
        let mut doc = vec![format!("`{}`.", term.uri)];
        let description = description_lines(term);
        if !description.is_empty() {
            doc.push(String::new());
            doc.extend(description);
        }
        doc.push(String::new());
        doc.push(format!("See <{}>", term.uri));
        f.comment("///", &doc);
        f.line(&format!(
            "pub const {ident}: Term = Term::new(NAMESPACE, {:?});",
            term.local_part
        ));
        f.blank();
    }

    f.line("/// Every term of the vocabulary, in declaration order.");
    if terms.is_empty() {
        f.line("pub const TERMS: &[Term] = &[];");
    } else {
        f.line("pub const TERMS: &[Term] = &[");
        f.indent();
        for (ident, _) in &terms {
            f.line(&format!("{ident},"));
        }
        f.dedent();
        f.line("];");
    }

    for _ in &modules {
        f.dedent();
        f.line("}");
    }

    Ok(f.finish())
}

fn write_term_type(f: &mut SourceFile, name: &str) {
    f.line(&format!(
        "/// A term of the {name} vocabulary: [`NAMESPACE`] followed by a local name."
    ));
    f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    f.line("pub struct Term {");
    f.line("    namespace: &'static str,");
    f.line("    local_name: &'static str,");
    f.line("}");
    f.blank();
    f.line("impl Term {");
    f.indent();
    f.line("/// Creates a term from its namespace and local name.");
    f.line("#[must_use]");
    f.line("pub const fn new(namespace: &'static str, local_name: &'static str) -> Self {");
    f.line("    Self { namespace, local_name }");
    f.line("}");
    f.blank();
    f.line("/// The namespace IRI.");
    f.line("#[must_use]");
    f.line("pub const fn namespace(&self) -> &'static str {");
    f.line("    self.namespace");
    f.line("}");
    f.blank();
    f.line("/// The local name, relative to the namespace.");
    f.line("#[must_use]");
    f.line("pub const fn local_name(&self) -> &'static str {");
    f.line("    self.local_name");
    f.line("}");
    f.blank();
    f.line("/// The full IRI.");
    f.line("#[must_use]");
    f.line("pub fn iri(&self) -> String {");
    f.line("    let mut iri = String::with_capacity(self.namespace.len() + self.local_name.len());");
    f.line("    iri.push_str(self.namespace);");
    f.line("    iri.push_str(self.local_name);");
    f.line("    iri");
    f.line("}");
    f.dedent();
    f.line("}");
    f.blank();
    f.line("impl fmt::Display for Term {");
    f.indent();
    f.line("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
    f.line("    f.write_str(self.namespace)?;");
    f.line("    f.write_str(self.local_name)");
    f.line("}");
    f.dedent();
    f.line("}");
    f.blank();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::tests::term;

    fn vocab<'a>(terms: Vec<&'a crate::extract::TermEntry>) -> Vocabulary<'a> {
        Vocabulary {
            name: "Test",
            prefix: "http://example.org/ns#",
            package: None,
            type_name: "Test",
            terms,
        }
    }

    #[test]
    fn renders_constants_and_terms() {
        let thing = term("Thing", "Thing", Some("A thing."));
        let out = render(&vocab(vec![&thing])).unwrap();
        assert!(out.contains("pub const NAMESPACE: &str = \"http://example.org/ns#\";"));
        assert!(out.contains("pub const PREFIX: &str = \"test\";"));
        assert!(out.contains("/// `http://example.org/ns#Thing`.\n///\n/// A thing.\n///\n/// See <http://example.org/ns#Thing>\n"));
        assert!(out.contains("pub const Thing: Term = Term::new(NAMESPACE, \"Thing\");"));
        assert!(out.contains("pub const TERMS: &[Term] = &[\n    Thing,\n];"));
    }

    #[test]
    fn original_local_part_is_preserved() {
        let t = term("has_value", "has-value", None);
        let out = render(&vocab(vec![&t])).unwrap();
        assert!(out.contains("pub const has_value: Term = Term::new(NAMESPACE, \"has-value\");"));
        assert!(out.contains(
            "/// `http://example.org/ns#has-value`.\n///\n/// See <http://example.org/ns#has-value>\npub const has_value"
        ));
    }

    #[test]
    fn long_descriptions_wrap_inside_doc_comments() {
        let long = "word ".repeat(30);
        let t = term("Thing", "Thing", Some(&long));
        let out = render(&vocab(vec![&t])).unwrap();
        let lines: Vec<&str> = out.lines().filter(|l| l.contains("word")).collect();
        assert!(lines.len() > 1);
        for line in lines {
            assert!(line.starts_with("/// word"), "{line:?}");
            assert!(line.len() <= "/// ".len() + crate::describe::WRAP_WIDTH);
        }
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        let t = term("type", "type", None);
        let out = render(&vocab(vec![&t])).unwrap();
        assert!(out.contains("pub const r#type: Term = Term::new(NAMESPACE, \"type\");"));
    }

    #[test]
    fn empty_vocabulary_is_well_formed() {
        let out = render(&vocab(Vec::new())).unwrap();
        assert!(out.contains("pub const NAMESPACE"));
        assert!(out.contains("pub const TERMS: &[Term] = &[];"));
        assert_eq!(out.matches(": Term = Term::new").count(), 0);
    }

    #[test]
    fn package_becomes_nested_modules() {
        let thing = term("Thing", "Thing", None);
        let mut v = vocab(vec![&thing]);
        v.package = Some("vocab::ns");
        let out = render(&v).unwrap();
        assert!(out.contains("pub mod vocab {\n    pub mod ns {\n        use core::fmt;"));
        assert!(out.ends_with("    }\n}\n"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }
}
