//! Test the file-backed backend through the registry.

use std::io::Write;

use crate::backend::{self, BackendInitError};
use crate::e2e_tests::helpers::*;

fn turtle_file(content: &str) -> tempfile::NamedTempFile {
    #[allow(clippy::expect_used)]
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    #[allow(clippy::expect_used)]
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_serving_from_a_turtle_file() {
    let file = turtle_file(concat!(
        "<http://example.org/a> <http://example.org/p> \"one\" .\n",
        "<http://example.org/b> <http://example.org/p> \"two\" .\n",
    ));
    let raw = format!("turtle?{}", file.path().display());

    #[allow(clippy::expect_used)]
    let server = TestServer::with_backend(backend::resolve(&raw).expect("backend should resolve"));
    let body = server.get(&no_params());

    assert!(body.contains("hydra:totalItems \"2\"^^xsd:integer"));
    assert!(body.contains("<http://example.org/a> <http://example.org/p> \"one\" ."));
}

#[test]
fn test_missing_file_fails_at_resolution() {
    let result = backend::resolve("turtle?/no/such/file.ttl");
    assert!(matches!(result, Err(BackendInitError::Load { .. })));
}

#[test]
fn test_unknown_identifier_fails_at_resolution() {
    let result = backend::resolve("sqlite?data.db");
    assert_eq!(
        result.err().map(|error| error.to_string()),
        Some("unknown backend identifier: sqlite".to_string())
    );
}
