//! Turtle serialization of fragment documents.
//!
//! The writer emits a fixed prefix header, abbreviates IRIs under those
//! prefixes when the local name is simple enough, and falls back to the
//! full `<...>` form otherwise. Output is deterministic: the same
//! statements always serialize to the same bytes.

use std::fmt::Write;

use crate::fragment::{Node, Statement};
use crate::types::Literal;
use crate::vocab;

/// Prefixes declared at the top of every document, in this order.
const PREFIXES: &[(&str, &str)] = &[
    ("rdf", vocab::rdf::NAMESPACE),
    ("void", vocab::void::NAMESPACE),
    ("hydra", vocab::hydra::NAMESPACE),
    ("xsd", vocab::xsd::NAMESPACE),
];

/// Serialize statements to a Turtle document.
pub fn write_document(statements: &[Statement]) -> String {
    let mut out = String::new();
    for (prefix, namespace) in PREFIXES {
        let _ = writeln!(out, "@prefix {prefix}: <{namespace}> .");
    }
    out.push('\n');
    for statement in statements {
        write_node(&mut out, &statement.subject);
        out.push(' ');
        write_predicate(&mut out, &statement.predicate);
        out.push(' ');
        write_node(&mut out, &statement.object);
        out.push_str(" .\n");
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Iri(iri) => write_resource(out, iri),
        Node::Blank(label) => {
            let _ = write!(out, "_:{label}");
        }
        Node::Literal(literal) => write_literal(out, literal),
    }
}

fn write_predicate(out: &mut String, predicate: &str) {
    if predicate == vocab::rdf::TYPE {
        out.push('a');
    } else {
        write_resource(out, predicate);
    }
}

fn write_resource(out: &mut String, iri: &str) {
    // Blank node labels from source data pass back through unchanged.
    if iri.starts_with("_:") {
        out.push_str(iri);
    } else if let Some(prefixed) = abbreviate(iri) {
        out.push_str(&prefixed);
    } else {
        let _ = write!(out, "<{iri}>");
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    let _ = write!(out, "\"{}\"", escape(&literal.value));
    if let Some(language) = &literal.language {
        let _ = write!(out, "@{language}");
    } else if let Some(datatype) = &literal.datatype {
        out.push_str("^^");
        write_resource(out, datatype);
    }
}

fn abbreviate(iri: &str) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, namespace)| {
        iri.strip_prefix(namespace)
            .filter(|local| is_simple_local_name(local))
            .map(|local| format!("{prefix}:{local}"))
    })
}

/// Conservative ASCII subset of Turtle's prefixed-name grammar. Anything
/// outside it keeps the full IRI form, which is always valid.
fn is_simple_local_name(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Escape a literal value for a double-quoted Turtle string.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() => {
                let _ = write!(escaped, "\\u{:04X}", u32::from(ch));
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(statement: Statement) -> String {
        let document = write_document(&[statement]);
        #[allow(clippy::expect_used)]
        document
            .lines()
            .last()
            .expect("document should have a statement line")
            .to_string()
    }

    #[test]
    fn test_prefix_header_comes_first() {
        let document = write_document(&[]);
        assert!(document.starts_with(
            "@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n"
        ));
        assert!(document.contains("@prefix hydra: <http://www.w3.org/ns/hydra/core#> .\n"));
    }

    #[test]
    fn test_plain_statement() {
        let line = serialize(Statement::new(
            Node::iri("http://example.org/alice"),
            "http://xmlns.com/foaf/0.1/knows",
            Node::iri("http://example.org/bob"),
        ));
        assert_eq!(
            line,
            "<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> ."
        );
    }

    #[test]
    fn test_rdf_type_becomes_a() {
        let line = serialize(Statement::new(
            Node::iri("http://example.org/d"),
            vocab::rdf::TYPE,
            Node::iri(vocab::void::DATASET),
        ));
        assert_eq!(line, "<http://example.org/d> a void:Dataset .");
    }

    #[test]
    fn test_known_namespaces_are_abbreviated() {
        let line = serialize(Statement::new(
            Node::iri("http://example.org/f"),
            vocab::hydra::TOTAL_ITEMS,
            Node::Literal(Literal::with_datatype("7", vocab::xsd::INTEGER)),
        ));
        assert_eq!(
            line,
            "<http://example.org/f> hydra:totalItems \"7\"^^xsd:integer ."
        );
    }

    #[test]
    fn test_awkward_local_names_stay_expanded() {
        // An empty or non-alphanumeric local name cannot be prefixed.
        let line = serialize(Statement::new(
            Node::iri("http://rdfs.org/ns/void#"),
            "http://rdfs.org/ns/void#has/slash",
            Node::iri("http://www.w3.org/ns/hydra/core#next"),
        ));
        assert_eq!(
            line,
            "<http://rdfs.org/ns/void#> <http://rdfs.org/ns/void#has/slash> hydra:next ."
        );
    }

    #[test]
    fn test_blank_nodes() {
        let line = serialize(Statement::new(
            Node::Blank("template"),
            vocab::hydra::VARIABLE,
            Node::iri("_:carried"),
        ));
        assert_eq!(line, "_:template hydra:variable _:carried .");
    }

    #[test]
    fn test_language_tagged_literal() {
        let line = serialize(Statement::new(
            Node::iri("http://s"),
            "http://p",
            Node::Literal(Literal::with_language("hello", "en-gb")),
        ));
        assert_eq!(line, "<http://s> <http://p> \"hello\"@en-gb .");
    }

    #[test]
    fn test_literal_escaping() {
        let line = serialize(Statement::new(
            Node::iri("http://s"),
            "http://p",
            Node::Literal(Literal::plain("line\nbreak \"quoted\" back\\slash")),
        ));
        assert_eq!(
            line,
            "<http://s> <http://p> \"line\\nbreak \\\"quoted\\\" back\\\\slash\" ."
        );
    }

    #[test]
    fn test_control_characters_become_unicode_escapes() {
        let line = serialize(Statement::new(
            Node::iri("http://s"),
            "http://p",
            Node::Literal(Literal::plain("bell\u{7}")),
        ));
        assert_eq!(line, "<http://s> <http://p> \"bell\\u0007\" .");
    }
}
