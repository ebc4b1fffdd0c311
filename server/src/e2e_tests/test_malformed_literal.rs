//! Test rejection of unparseable literal parameters.

use crate::e2e_tests::helpers::*;
use crate::server::RequestError;
use crate::testing::numbered_facts;

#[test]
fn test_unterminated_literal_is_rejected() {
    let server = TestServer::from_facts(numbered_facts(3));
    let result = server.try_get(&params(None, None, Some("\"unterminated"), None));

    let Err(RequestError::MalformedPattern(error)) = result else {
        panic!("expected a malformed pattern error, got {result:?}");
    };
    assert_eq!(error.raw, "\"unterminated");
    assert_eq!(
        error.to_string(),
        "\"unterminated is not a valid string literal"
    );
}

#[test]
fn test_empty_annotation_is_rejected_in_any_position() {
    let server = TestServer::from_facts(numbered_facts(3));

    assert!(server.try_get(&params(Some("\"x\"@"), None, None, None)).is_err());
    assert!(server.try_get(&params(None, Some("\"x\"^^"), None, None)).is_err());
    assert!(server.try_get(&params(None, None, Some("\"x\"@"), None)).is_err());
}

#[test]
fn test_rejection_does_not_poison_the_server() {
    let server = TestServer::from_facts(numbered_facts(3));

    assert!(server.try_get(&params(None, None, Some("\""), None)).is_err());

    // The very next request is served normally.
    let body = server.get(&no_params());
    assert!(body.contains("hydra:totalItems \"3\"^^xsd:integer"));
}
