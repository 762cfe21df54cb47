//! Vocabulary → source identifier mapping.
//!
//! Deterministic mappings from term keys and vocabulary names to identifiers
//! that are legal in the target languages.

/// Rust keywords that can be written as raw identifiers (`r#type`).
const RUST_RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Rust keywords that cannot be raw identifiers.
const RUST_RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Java keywords and literals that cannot be used as field names.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Removes `#` and replaces `.` and `-` with `_`.
///
/// Idempotent: the output contains none of the characters it rewrites.
#[must_use]
pub fn clean_key(local_part: &str) -> String {
    local_part
        .chars()
        .filter(|&c| c != '#')
        .map(|c| if c == '.' || c == '-' { '_' } else { c })
        .collect()
}

/// Maps a term key to a Rust constant identifier.
///
/// Characters that cannot appear in an identifier become `_`, a leading digit
/// gets a `_` prefix, and keywords are escaped.
#[must_use]
pub fn to_rust_ident(key: &str) -> String {
    let ident = to_ascii_ident(key);
    if RUST_RESERVED.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}

/// Maps a term key to a Java field identifier.
#[must_use]
pub fn to_java_ident(key: &str) -> String {
    let ident = to_ascii_ident(key);
    if JAVA_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}

/// Converts a dotted or `::`-separated package into Rust module segments.
#[must_use]
pub fn rust_module_path(package: &str) -> Vec<String> {
    package
        .split("::")
        .flat_map(|part| part.split('.'))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| to_rust_ident(&to_snake_case(part)))
        .collect()
}

/// Converts a camelCase or PascalCase label into snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore inside runs of capitals ("IRIRef" → "iriref").
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }
    result
}

/// Capitalizes the first character of a string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let mut result = c.to_uppercase().to_string();
            result.push_str(chars.as_str());
            result
        }
    }
}

fn to_ascii_ident(key: &str) -> String {
    let mut ident: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
