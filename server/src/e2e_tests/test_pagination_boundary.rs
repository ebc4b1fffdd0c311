//! Test the exactly-full last page.
//!
//! A total that is a multiple of the page size must end cleanly: the last
//! page is full yet carries no next link, and stepping past it yields an
//! empty page rather than an error.

use crate::e2e_tests::helpers::*;
use crate::testing::{numbered_facts, numbered_subject};

#[test]
fn test_exactly_two_full_pages() {
    let server = TestServer::from_facts(numbered_facts(200));

    let first = server.get(&no_params());
    assert!(first.contains("hydra:itemsPerPage \"100\"^^xsd:integer"));
    assert!(first.contains("hydra:next <http://fragments.test/?start=100> ."));

    let last = server.get(&params(None, None, None, Some("100")));
    assert!(last.contains(&numbered_subject(199)));
    assert!(last.contains("hydra:totalItems \"200\"^^xsd:integer"));
    assert!(last.contains("hydra:itemsPerPage \"100\"^^xsd:integer"));
    assert_eq!(count_occurrences(&last, "hydra:next"), 0);
}

#[test]
fn test_single_exactly_full_page() {
    let server = TestServer::from_facts(numbered_facts(100));
    let body = server.get(&no_params());

    assert!(body.contains("hydra:totalItems \"100\"^^xsd:integer"));
    assert!(body.contains("hydra:itemsPerPage \"100\"^^xsd:integer"));
    assert_eq!(count_occurrences(&body, "hydra:next"), 0);
}

#[test]
fn test_stepping_past_the_clean_end() {
    let server = TestServer::from_facts(numbered_facts(200));
    let body = server.get(&params(None, None, None, Some("200")));

    assert_eq!(count_occurrences(&body, "<http://example.org/s"), 0);
    assert!(body.contains("hydra:totalItems \"200\"^^xsd:integer"));
    assert!(body.contains("hydra:itemsPerPage \"0\"^^xsd:integer"));
    assert_eq!(count_occurrences(&body, "hydra:next"), 0);
}
