//! Test the complete document served for a small unfiltered fragment.

use crate::e2e_tests::helpers::*;

const SOURCE: &str = r#"
<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> .
<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" .
<http://example.org/bob> <http://xmlns.com/foaf/0.1/name> "Bob"@en .
"#;

#[test]
fn test_unfiltered_fragment_serves_all_facts() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());

    assert!(body.contains(
        "<http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> ."
    ));
    assert!(body.contains(
        "<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" ."
    ));
    assert!(body.contains(
        "<http://example.org/bob> <http://xmlns.com/foaf/0.1/name> \"Bob\"@en ."
    ));
}

#[test]
fn test_metadata_describes_the_fragment() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());

    // Dataset typing, and the request as a subset of it.
    assert!(body.contains("<http://fragments.test/#dataset> a void:Dataset ."));
    assert!(body.contains("<http://fragments.test/#dataset> a hydra:Collection ."));
    assert!(body.contains(
        "<http://fragments.test/#dataset> void:subset <http://fragments.test/> ."
    ));

    // All three facts fit on one page.
    assert!(body.contains("<http://fragments.test/> hydra:totalItems \"3\"^^xsd:integer ."));
    assert!(body.contains("<http://fragments.test/> hydra:itemsPerPage \"3\"^^xsd:integer ."));
    assert_eq!(count_occurrences(&body, "hydra:next"), 0);
}

#[test]
fn test_prefix_header_is_declared_once() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());

    assert_eq!(count_occurrences(&body, "@prefix rdf:"), 1);
    assert_eq!(count_occurrences(&body, "@prefix void:"), 1);
    assert_eq!(count_occurrences(&body, "@prefix hydra:"), 1);
    assert_eq!(count_occurrences(&body, "@prefix xsd:"), 1);
}

#[test]
fn test_facts_precede_metadata() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());
    let lines = statement_lines(&body);

    // Three facts in stable order, then the dataset description.
    assert!(lines[0].starts_with("<http://example.org/alice>"));
    assert!(lines[1].starts_with("<http://example.org/alice>"));
    assert!(lines[2].starts_with("<http://example.org/bob>"));
    assert!(lines[3].starts_with("<http://fragments.test/#dataset>"));
}
