//! Test that a failing backend maps to a request-scoped server error.

use std::sync::Arc;

use crate::e2e_tests::helpers::*;
use crate::server::RequestError;

#[test]
fn test_store_failure_propagates() {
    let server = TestServer::with_backend(Arc::new(FailingBackend));
    let result = server.try_get(&no_params());

    let Err(RequestError::Backend(error)) = result else {
        panic!("expected a backend error, got {result:?}");
    };
    assert_eq!(
        error.to_string(),
        "backend query failed: synthetic store failure"
    );
}

#[test]
fn test_malformed_pattern_wins_over_backend_failure() {
    // The pattern is typed before the backend is consulted, so a broken
    // request never reaches the failing store.
    let server = TestServer::with_backend(Arc::new(FailingBackend));
    let result = server.try_get(&params(Some("\"broken"), None, None, None));

    assert!(matches!(result, Err(RequestError::MalformedPattern(_))));
}
