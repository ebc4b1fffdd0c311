//! Test serving a fragment from an empty store.

use crate::e2e_tests::helpers::*;

#[test]
fn test_empty_store_serves_pure_metadata() {
    let server = TestServer::from_facts(Vec::new());
    let body = server.get(&no_params());

    assert!(body.contains("<http://fragments.test/#dataset> a void:Dataset ."));
    assert!(body.contains("hydra:totalItems \"0\"^^xsd:integer"));
    assert!(body.contains("hydra:itemsPerPage \"0\"^^xsd:integer"));
    assert_eq!(count_occurrences(&body, "hydra:next"), 0);

    // The search template is still present, so the fragment stays
    // navigable.
    assert!(body.contains("hydra:template \"http://fragments.test/{?s,p,o}\""));
}

#[test]
fn test_empty_inline_source_is_an_empty_store() {
    let server = TestServer::from_turtle("");
    let body = server.get(&no_params());

    assert!(body.contains("hydra:totalItems \"0\"^^xsd:integer"));
}
