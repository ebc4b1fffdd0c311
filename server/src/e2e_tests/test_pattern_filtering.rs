//! Test that position parameters narrow the served facts.

use crate::e2e_tests::helpers::*;

const SOURCE: &str = r#"
<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> .
<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/carol> .
<http://example.org/bob> <http://xmlns.com/foaf/0.1/knows> <http://example.org/carol> .
<http://example.org/bob> <http://purl.org/dc/terms/title> "Bob's page" .
"#;

#[test]
fn test_subject_filter() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(Some("http://example.org/alice"), None, None, None));

    assert!(body.contains("hydra:totalItems \"2\"^^xsd:integer"));
    assert!(body.contains("<http://example.org/bob> ."));
    assert!(body.contains("<http://example.org/carol> ."));
    assert!(!body.contains("dc/terms/title"));
}

#[test]
fn test_subject_and_object_filter() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(
        Some("http://example.org/alice"),
        None,
        Some("http://example.org/carol"),
        None,
    ));

    assert!(body.contains("hydra:totalItems \"1\"^^xsd:integer"));
    assert!(body.contains(
        "<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/carol> ."
    ));
}

#[test]
fn test_unmatched_pattern_is_an_empty_fragment() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(Some("http://example.org/nobody"), None, None, None));

    assert!(body.contains("hydra:totalItems \"0\"^^xsd:integer"));
    assert!(body.contains("hydra:itemsPerPage \"0\"^^xsd:integer"));
    assert!(!body.contains("foaf"));
}

#[test]
fn test_variable_and_absent_parameters_are_equivalent() {
    let server = TestServer::from_turtle(SOURCE);

    let absent = server.get(&no_params());
    let named_variables = server.get(&params(Some("?s"), Some("?p"), Some("?o"), None));
    let whitespace = server.get(&params(Some("  "), Some(""), None, None));

    // The echoed request URI differs, but the same four facts are served
    // with the same counts.
    let facts = statement_lines(&absent);
    assert_eq!(facts[..4], statement_lines(&named_variables)[..4]);
    assert_eq!(facts[..4], statement_lines(&whitespace)[..4]);
    assert!(named_variables.contains("hydra:totalItems \"4\"^^xsd:integer"));
    assert!(whitespace.contains("hydra:totalItems \"4\"^^xsd:integer"));
}

#[test]
fn test_unknown_iri_shape_matches_nothing_rather_than_erroring() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(Some("certainly not an iri"), None, None, None));

    assert!(body.contains("hydra:totalItems \"0\"^^xsd:integer"));
}
