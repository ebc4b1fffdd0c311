//! Common helpers for end-to-end tests.

use std::sync::Arc;

use crate::FragmentServer;
use crate::backend::{Backend, MemoryBackend, QueryError};
use crate::server::{FragmentParams, RequestError};
use crate::types::{Fact, PageResult, TriplePattern};

/// Root URI used by every test request.
pub const TEST_ROOT: &str = "http://fragments.test/";

/// The full pipeline over a test backend.
pub struct TestServer {
    server: FragmentServer,
}

impl TestServer {
    /// Serve the given facts from memory.
    #[must_use]
    pub fn from_facts(facts: Vec<Fact>) -> Self {
        Self::with_backend(Arc::new(MemoryBackend::from_facts(facts)))
    }

    /// Serve facts parsed from inline Turtle source.
    #[must_use]
    pub fn from_turtle(source: &str) -> Self {
        #[allow(clippy::expect_used)]
        let backend = MemoryBackend::from_turtle(source).expect("test source should parse");
        Self::with_backend(Arc::new(backend))
    }

    /// Serve from an arbitrary backend.
    #[must_use]
    pub const fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            server: FragmentServer::new(backend),
        }
    }

    /// Answer one request, panicking on pipeline errors.
    #[must_use]
    pub fn get(&self, params: &FragmentParams) -> String {
        #[allow(clippy::expect_used)]
        self.server.handle(TEST_ROOT, params).expect("request should succeed")
    }

    /// Answer one request, keeping the error.
    pub fn try_get(&self, params: &FragmentParams) -> Result<String, RequestError> {
        self.server.handle(TEST_ROOT, params)
    }
}

/// Build request parameters positionally.
#[must_use]
pub fn params(
    s: Option<&str>,
    p: Option<&str>,
    o: Option<&str>,
    start: Option<&str>,
) -> FragmentParams {
    FragmentParams {
        s: s.map(str::to_string),
        p: p.map(str::to_string),
        o: o.map(str::to_string),
        start: start.map(str::to_string),
    }
}

/// Parameters of a bare `GET /`.
#[must_use]
pub fn no_params() -> FragmentParams {
    FragmentParams::default()
}

/// Number of times `needle` occurs in the response body.
#[must_use]
pub fn count_occurrences(body: &str, needle: &str) -> usize {
    body.matches(needle).count()
}

/// The statement lines of a response body, prefix header excluded.
#[must_use]
pub fn statement_lines(body: &str) -> Vec<&str> {
    body.lines()
        .filter(|line| !line.is_empty() && !line.starts_with("@prefix"))
        .collect()
}

/// A backend that always fails, for error propagation tests.
pub struct FailingBackend;

impl Backend for FailingBackend {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn query(
        &self,
        _pattern: &TriplePattern,
        _cursor: Option<&str>,
    ) -> Result<PageResult, QueryError> {
        Err(QueryError::Store("synthetic store failure".to_string()))
    }
}
