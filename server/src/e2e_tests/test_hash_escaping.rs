//! Test `#` handling in echoed request URIs.
//!
//! The dataset node deliberately uses a `#dataset` fragment, but a `#`
//! inside an echoed parameter value must come out percent-encoded or the
//! written URI would be truncated when read back.

use crate::e2e_tests::helpers::*;

const SOURCE: &str = r#"
<http://example.org/page#section> <http://example.org/p> <http://example.org/o> .
"#;

#[test]
fn test_hash_in_parameter_is_percent_encoded() {
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&params(Some("http://example.org/page#section"), None, None, None));

    assert!(body.contains("hydra:totalItems \"1\"^^xsd:integer"));
    assert!(body.contains(
        "void:subset <http://fragments.test/?s=http%3A%2F%2Fexample.org%2Fpage%23section> ."
    ));

    // The only raw `#` inside an IRI is the dataset node's own fragment.
    let subjects_with_hash: Vec<&str> = statement_lines(&body)
        .into_iter()
        .filter(|line| line.contains("<http://fragments.test/") && line.contains('#'))
        .collect();
    for line in subjects_with_hash {
        assert!(
            line.contains("<http://fragments.test/#dataset>"),
            "unexpected raw fragment marker in: {line}"
        );
    }
}

#[test]
fn test_served_facts_keep_raw_fragment_iris() {
    // Escaping applies to the echoed request URI, not to data.
    let server = TestServer::from_turtle(SOURCE);
    let body = server.get(&no_params());

    assert!(body.contains(
        "<http://example.org/page#section> <http://example.org/p> <http://example.org/o> ."
    ));
}
