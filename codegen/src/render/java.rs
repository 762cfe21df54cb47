//! Java renderer: one class of Sesame `URI` constants initialized in a
//! `static` block.

use super::{assign_identifiers, description_lines, Vocabulary};
use crate::emit::SourceFile;
use crate::error::Result;
use crate::mapping::to_java_ident;

const RESERVED: &[&str] = &["NAMESPACE", "PREFIX"];

/// Renders `vocab` as a Java class named after `vocab.type_name`.
///
/// # Errors
///
/// Returns an error if two term keys map to the same Java identifier.
pub fn render(vocab: &Vocabulary<'_>) -> Result<String> {
    let terms = assign_identifiers(&vocab.terms, RESERVED, to_java_ident)?;
    let class_name = to_java_ident(vocab.type_name);
    let mut f = SourceFile::new("\t");

    if let Some(package) = vocab.package {
        f.line(&format!("package {};", package.replace("::", ".")));
        f.blank();
    }

    f.line("import org.openrdf.model.URI;");
    f.line("import org.openrdf.model.ValueFactory;");
    f.line("import org.openrdf.model.impl.ValueFactoryImpl;");
    f.blank();

    f.line("/**");
    f.line(&format!(" * Namespace {}", javadoc(vocab.name)));
    f.line(" */");
    f.line(&format!("public class {class_name} {{"));
    f.blank();
    f.indent();

    f.line(&format!("/** {{@code {}}} **/", javadoc(vocab.prefix)));
    f.line(&format!(
        "public static final String NAMESPACE = \"{}\";",
        java_string(vocab.prefix)
    ));
    f.blank();
    let lower = vocab.name.to_lowercase();
    f.line(&format!("/** {{@code {}}} **/", javadoc(&lower)));
    f.line(&format!(
        "public static final String PREFIX = \"{}\";",
        java_string(&lower)
    ));
    f.blank();

    for (ident, term) in &terms {
        let uri = javadoc(&term.uri);
        let mut doc = vec![format!("{{@code {uri}}}.")];
        let description = description_lines(term);
        if !description.is_empty() {
            doc.push("<p>".to_string());
            doc.extend(description.iter().map(|line| javadoc(line)));
        }
        doc.push(String::new());
        doc.push(format!("@see <a href=\"{uri}\">{}</a>", term.key));
        f.line("/**");
        f.comment(" *", &doc);
        f.line(" */");
        f.line(&format!("public static final URI {ident};"));
        f.blank();
    }

    f.line("static {");
    f.indent();
    f.line("ValueFactory factory = ValueFactoryImpl.getInstance();");
    f.blank();
    for (ident, term) in &terms {
        f.line(&format!(
            "{ident} = factory.createURI({class_name}.NAMESPACE, \"{}\");",
            java_string(&term.local_part)
        ));
    }
    f.dedent();
    f.line("}");
    f.blank();
    f.dedent();
    f.line("}");

    Ok(f.finish())
}

/// Escapes text for a Java string literal.
fn java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Keeps text from closing the surrounding Javadoc block.
fn javadoc(s: &str) -> String {
    s.replace("*/", "*&#47;")
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
            package: Some("org.example"),
            type_name: "TEST",
            terms,
        }
    }

    #[test]
    fn renders_class_layout() {
        let thing = term("Thing", "Thing", Some("A   thing."));
        let out = render(&vocab(vec![&thing])).unwrap();
        assert!(out.starts_with("package org.example;\n\nimport org.openrdf.model.URI;\n"));
        assert!(out.contains("public class TEST {\n"));
        assert!(out.contains("\tpublic static final String NAMESPACE = \"http://example.org/ns#\";\n"));
        assert!(out.contains("\tpublic static final String PREFIX = \"test\";\n"));
        assert!(out.contains(
            "\t/**\n\t * {@code http://example.org/ns#Thing}.\n\t * <p>\n\t * A thing.\n\t *\n\t * @see <a href=\"http://example.org/ns#Thing\">Thing</a>\n\t */\n\tpublic static final URI Thing;\n"
        ));
        assert!(out.contains("\t\tThing = factory.createURI(TEST.NAMESPACE, \"Thing\");\n"));
        assert!(out.ends_with("\t}\n\n}\n"));
    }

    #[test]
    fn static_block_uses_original_local_part() {
        let t = term("has_value", "has-value", None);
        let out = render(&vocab(vec![&t])).unwrap();
        assert!(out.contains("has_value = factory.createURI(TEST.NAMESPACE, \"has-value\");"));
        assert!(out.contains(
            "\t/**\n\t * {@code http://example.org/ns#has-value}.\n\t *\n\t * @see <a href=\"http://example.org/ns#has-value\">has_value</a>\n\t */\n"
        ));
        assert!(!out.contains("<p>"));
    }

    #[test]
    fn long_descriptions_wrap_inside_javadoc() {
        let long = "word ".repeat(30);
        let t = term("Thing", "Thing", Some(&long));
        let out = render(&vocab(vec![&t])).unwrap();
        let lines: Vec<&str> = out.lines().filter(|l| l.contains("word")).collect();
        assert!(lines.len() > 1);
        for line in lines {
            assert!(line.starts_with("\t * word"), "{line:?}");
            assert!(line.len() <= "\t * ".len() + crate::describe::WRAP_WIDTH);
        }
    }

    #[test]
    fn empty_vocabulary_still_has_static_block() {
        let mut v = vocab(Vec::new());
        v.package = None;
        let out = render(&v).unwrap();
        assert!(out.starts_with("import org.openrdf.model.URI;"));
        assert!(out.contains("\tstatic {\n\t\tValueFactory factory = ValueFactoryImpl.getInstance();\n\n\t}\n"));
        assert!(!out.contains("public static final URI"));
    }

    #[test]
    fn escaping() {
        assert_eq!(java_string("a\"b\\c"), "a\\\"b\\\\c");
        assert_eq!(javadoc("x */ y"), "x *&#47; y");
    }
}
