//! Test paging through a fragment larger than one page.

use crate::e2e_tests::helpers::*;
use crate::testing::{numbered_facts, numbered_subject};

#[test]
fn test_three_pages_partition_the_fragment() {
    let server = TestServer::from_facts(numbered_facts(250));

    let first = server.get(&no_params());
    assert_eq!(count_occurrences(&first, "<http://example.org/s"), 100);
    assert!(first.contains(&numbered_subject(0)));
    assert!(first.contains(&numbered_subject(99)));
    assert!(!first.contains(&numbered_subject(100)));
    assert!(first.contains("hydra:totalItems \"250\"^^xsd:integer"));
    assert!(first.contains("hydra:itemsPerPage \"100\"^^xsd:integer"));
    assert!(first.contains(
        "<http://fragments.test/> hydra:next <http://fragments.test/?start=100> ."
    ));

    let second = server.get(&params(None, None, None, Some("100")));
    assert!(second.contains(&numbered_subject(100)));
    assert!(second.contains(&numbered_subject(199)));
    assert!(!second.contains(&numbered_subject(99)));
    assert!(!second.contains(&numbered_subject(200)));
    assert!(second.contains("hydra:totalItems \"250\"^^xsd:integer"));
    assert!(second.contains(
        "<http://fragments.test/?start=100> hydra:next <http://fragments.test/?start=200> ."
    ));

    let third = server.get(&params(None, None, None, Some("200")));
    assert_eq!(count_occurrences(&third, "<http://example.org/s"), 50);
    assert!(third.contains(&numbered_subject(200)));
    assert!(third.contains(&numbered_subject(249)));
    assert!(third.contains("hydra:itemsPerPage \"50\"^^xsd:integer"));
    assert_eq!(count_occurrences(&third, "hydra:next"), 0);
}

#[test]
fn test_next_link_keeps_the_pattern() {
    let mut facts = numbered_facts(150);
    facts.extend(numbered_facts(150).into_iter().map(|mut fact| {
        fact.predicate = "http://example.org/other".to_string();
        fact
    }));
    let server = TestServer::from_facts(facts);

    let body = server.get(&params(None, Some("http://example.org/p"), None, None));

    assert!(body.contains("hydra:totalItems \"150\"^^xsd:integer"));
    assert!(body.contains(
        "hydra:next <http://fragments.test/?p=http%3A%2F%2Fexample.org%2Fp&start=100> ."
    ));
}

#[test]
fn test_cursor_not_a_number_serves_the_first_page() {
    let server = TestServer::from_facts(numbered_facts(150));
    let body = server.get(&params(None, None, None, Some("not-a-number")));

    assert!(body.contains(&numbered_subject(0)));
    assert!(!body.contains(&numbered_subject(100)));
    // The bad cursor is still echoed; the next link follows the stable
    // ordering from offset zero.
    assert!(body.contains("hydra:next <http://fragments.test/?start=100> ."));
}

#[test]
fn test_cursor_past_the_end_is_an_empty_page() {
    let server = TestServer::from_facts(numbered_facts(150));
    let body = server.get(&params(None, None, None, Some("9000")));

    assert_eq!(count_occurrences(&body, "<http://example.org/s"), 0);
    assert!(body.contains("hydra:totalItems \"150\"^^xsd:integer"));
    assert!(body.contains("hydra:itemsPerPage \"0\"^^xsd:integer"));
    assert_eq!(count_occurrences(&body, "hydra:next"), 0);
}
