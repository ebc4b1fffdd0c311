//! Test literal object parameters, annotations included.

use crate::e2e_tests::helpers::*;

const SOURCE: &str = r#"
<http://example.org/a> <http://purl.org/dc/terms/title> "plain" .
<http://example.org/b> <http://purl.org/dc/terms/title> "plain"@en .
<http://example.org/c> <http://purl.org/dc/terms/title> "plain"^^<http://example.org/custom> .
<http://example.org/d> <http://purl.org/dc/terms/title> "plain"^^<http://www.w3.org/2001/XMLSchema#string> .
"#;

#[test]
fn test_plain_literal_matches_only_unannotated_values() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(None, None, Some("\"plain\""), None));

    // The explicit xsd:string in the source collapses to a plain literal,
    // so subjects a and d both match.
    assert!(body.contains("hydra:totalItems \"2\"^^xsd:integer"));
    assert!(body.contains("<http://example.org/a>"));
    assert!(body.contains("<http://example.org/d>"));
    assert!(!body.contains("<http://example.org/b> "));
    assert!(!body.contains("<http://example.org/c> "));
}

#[test]
fn test_language_tag_must_match() {
    let server = TestServer::from_turtle(SOURCE);

    let tagged = server.get(&params(None, None, Some("\"plain\"@en"), None));
    assert!(tagged.contains("hydra:totalItems \"1\"^^xsd:integer"));
    assert!(tagged.contains("<http://example.org/b> "));

    let wrong_tag = server.get(&params(None, None, Some("\"plain\"@fr"), None));
    assert!(wrong_tag.contains("hydra:totalItems \"0\"^^xsd:integer"));
}

#[test]
fn test_datatype_must_match() {
    let server = TestServer::from_turtle(SOURCE);

    let custom = server.get(&params(
        None,
        None,
        Some("\"plain\"^^http://example.org/custom"),
        None,
    ));
    assert!(custom.contains("hydra:totalItems \"1\"^^xsd:integer"));
    assert!(custom.contains("<http://example.org/c> "));
}

#[test]
fn test_served_literals_keep_their_annotations() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());

    assert!(body.contains("\"plain\" ."));
    assert!(body.contains("\"plain\"@en ."));
    assert!(body.contains("\"plain\"^^<http://example.org/custom> ."));
}
