//! Test the hypermedia search template.
//!
//! The template is the part of the response that makes the interface
//! self-describing: it must be identical on every page of every fragment.

use crate::e2e_tests::helpers::*;
use crate::testing::numbered_facts;

fn template_lines(body: &str) -> Vec<String> {
    statement_lines(body)
        .into_iter()
        .filter(|line| line.starts_with("_:"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_template_shape() {
    let server = TestServer::from_facts(numbered_facts(3));
    let body = server.get(&no_params());

    assert!(body.contains("<http://fragments.test/#dataset> hydra:search _:template ."));
    assert!(body.contains("_:template hydra:template \"http://fragments.test/{?s,p,o}\" ."));

    assert!(body.contains("_:template hydra:mapping _:mapping-s ."));
    assert!(body.contains("_:mapping-s hydra:variable \"s\" ."));
    assert!(body.contains("_:mapping-s hydra:property rdf:subject ."));

    assert!(body.contains("_:template hydra:mapping _:mapping-p ."));
    assert!(body.contains("_:mapping-p hydra:variable \"p\" ."));
    assert!(body.contains("_:mapping-p hydra:property rdf:predicate ."));

    assert!(body.contains("_:template hydra:mapping _:mapping-o ."));
    assert!(body.contains("_:mapping-o hydra:variable \"o\" ."));
    assert!(body.contains("_:mapping-o hydra:property rdf:object ."));
}

#[test]
fn test_template_is_identical_across_pages_and_patterns() {
    let server = TestServer::from_facts(numbered_facts(250));

    let unfiltered = server.get(&no_params());
    let filtered = server.get(&params(Some("http://example.org/s0001"), None, None, None));
    let paged = server.get(&params(None, None, None, Some("100")));

    let reference = template_lines(&unfiltered);
    assert_eq!(reference.len(), 10);
    assert_eq!(template_lines(&filtered), reference);
    assert_eq!(template_lines(&paged), reference);
}
