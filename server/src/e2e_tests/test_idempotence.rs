//! Test that equal requests produce byte-identical documents.

use crate::e2e_tests::helpers::*;
use crate::testing::numbered_facts;

#[test]
fn test_repeated_requests_are_byte_identical() {
    let server = TestServer::from_facts(numbered_facts(250));

    let first_run = server.get(&no_params());
    let second_run = server.get(&no_params());
    assert_eq!(first_run, second_run);

    let page_two_a = server.get(&params(None, None, None, Some("100")));
    let page_two_b = server.get(&params(None, None, None, Some("100")));
    assert_eq!(page_two_a, page_two_b);
}

#[test]
fn test_filtered_requests_are_byte_identical() {
    let server = TestServer::from_facts(numbered_facts(10));
    let request = params(
        Some("http://example.org/s0003"),
        Some("http://example.org/p"),
        None,
        None,
    );

    assert_eq!(server.get(&request), server.get(&request));
}
