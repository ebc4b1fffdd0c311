//! The fragment pipeline: raw request parameters in, Turtle body out.

use std::fmt::Write;
use std::sync::Arc;

use serde::Deserialize;

use crate::backend::{Backend, QueryError};
use crate::fragment;
use crate::types::{MalformedLiteral, TriplePattern};

/// Raw query parameters of a fragment request.
///
/// All four are optional; an absent position parameter leaves that
/// position unbound.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FragmentParams {
    /// Subject position.
    pub s: Option<String>,
    /// Predicate position.
    pub p: Option<String>,
    /// Object position.
    pub o: Option<String>,
    /// Pagination cursor copied from a previous page's next link.
    pub start: Option<String>,
}

/// Error answering one fragment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// A position parameter failed the literal grammar; the client must
    /// fix the request.
    MalformedPattern(MalformedLiteral),
    /// The backend failed; scoped to this request, the server keeps
    /// serving others.
    Backend(QueryError),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedPattern(error) => write!(f, "{error}"),
            Self::Backend(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// The composed request pipeline: type the parameters, query the backend,
/// wrap the page in metadata, serialize.
///
/// Holds no per-request state, so one instance serves all connections
/// concurrently.
pub struct FragmentServer {
    backend: Arc<dyn Backend>,
}

impl FragmentServer {
    #[must_use]
    pub const fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Answer one fragment request rooted at `root_uri`, returning the
    /// Turtle response body.
    ///
    /// Equal inputs produce byte-identical bodies; nothing in the pipeline
    /// depends on time or randomness.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MalformedPattern`] for an unparseable
    /// literal parameter and [`RequestError::Backend`] when the backend
    /// fails to answer.
    pub fn handle(&self, root_uri: &str, params: &FragmentParams) -> Result<String, RequestError> {
        let pattern = TriplePattern::from_params(
            params.s.as_deref(),
            params.p.as_deref(),
            params.o.as_deref(),
        )
        .map_err(RequestError::MalformedPattern)?;

        tracing::debug!(
            "answering {pattern:?} at cursor {:?} via '{}' backend",
            params.start,
            self.backend.name()
        );

        let page = self
            .backend
            .query(&pattern, params.start.as_deref())
            .map_err(RequestError::Backend)?;

        let request_uri = page_uri(root_uri, params, params.start.as_deref());
        let next_page_uri = page
            .next_cursor
            .as_deref()
            .map(|cursor| page_uri(root_uri, params, Some(cursor)));

        let document = fragment::compose(root_uri, &request_uri, &page, next_page_uri.as_deref());
        Ok(document.to_turtle())
    }
}

/// Rebuild a fragment URI from its parameters.
///
/// Recognized parameters are re-encoded in a canonical order, so the URI
/// in the response identifies the same fragment the request selected even
/// when the client encoded things differently. With no parameters at all
/// the URI is the root itself.
fn page_uri(root_uri: &str, params: &FragmentParams, start: Option<&str>) -> String {
    let mut query = String::new();
    for (name, value) in [
        ("s", params.s.as_deref()),
        ("p", params.p.as_deref()),
        ("o", params.o.as_deref()),
        ("start", start),
    ] {
        if let Some(value) = value {
            if !query.is_empty() {
                query.push('&');
            }
            let _ = write!(query, "{name}={}", urlencoding::encode(value));
        }
    }
    if query.is_empty() {
        root_uri.to_string()
    } else {
        format!("{root_uri}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
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

    #[test]
    fn test_bare_request_uri_is_the_root() {
        let uri = page_uri(
            "http://fragments.test/",
            &params(None, None, None, None),
            None,
        );
        assert_eq!(uri, "http://fragments.test/");
    }

    #[test]
    fn test_parameters_are_encoded_in_canonical_order() {
        let uri = page_uri(
            "http://fragments.test/",
            &params(Some("http://x/a"), None, Some("\"hi there\"@en"), None),
            Some("100"),
        );
        assert_eq!(
            uri,
            "http://fragments.test/?s=http%3A%2F%2Fx%2Fa&o=%22hi%20there%22%40en&start=100"
        );
    }

    #[test]
    fn test_hash_is_percent_encoded() {
        let uri = page_uri(
            "http://fragments.test/",
            &params(Some("http://x/y#z"), None, None, None),
            None,
        );
        assert_eq!(uri, "http://fragments.test/?s=http%3A%2F%2Fx%2Fy%23z");
    }

    #[test]
    fn test_empty_parameter_is_still_echoed() {
        let uri = page_uri(
            "http://fragments.test/",
            &params(Some(""), None, None, None),
            None,
        );
        assert_eq!(uri, "http://fragments.test/?s=");
    }
}
