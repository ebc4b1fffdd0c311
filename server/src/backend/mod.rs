//! Pluggable fact stores behind the fragment pipeline.
//!
//! A backend owns a read-only set of facts and answers one paginated
//! pattern query per request. The backend is chosen once at startup from a
//! `<identifier>?<configuration>` string via [`resolve`]; the built-in
//! identifiers are `turtle` (a Turtle file on disk) and `memory` (inline
//! Turtle source).

mod loader;
mod memory;
mod pagination;
mod turtle_file;

pub use memory::MemoryBackend;
pub use pagination::{match_page, paginate, start_offset};
pub use turtle_file::TurtleFileBackend;

use std::sync::Arc;

use crate::types::{PageResult, TriplePattern};

/// Capability contract for a fact store.
///
/// `query` must window the matches under a stable total ordering, so that
/// increasing cursors partition the full match set without duplication or
/// omission while the underlying data is unchanged. Any deterministic
/// ordering will do; the built-in backends sort facts lexicographically by
/// subject, then predicate, then object.
pub trait Backend: Send + Sync {
    /// Short backend name for logging.
    fn name(&self) -> &'static str;

    /// Answer one page of facts matching `pattern`.
    ///
    /// `cursor` is the opaque start marker from a previous page's
    /// [`PageResult::next_cursor`]; absent or unrecognizable cursors mean
    /// the first page.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the underlying store fails. The failure
    /// is scoped to this one request.
    fn query(
        &self,
        pattern: &TriplePattern,
        cursor: Option<&str>,
    ) -> Result<PageResult, QueryError>;
}

/// Error resolving or loading a backend at startup.
///
/// Construction failures are fatal: the process must not start serving
/// without a live backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendInitError {
    /// The identifier names no registered backend.
    UnknownBackend(String),
    /// The configured source could not be read or parsed.
    Load { source: String, message: String },
}

impl std::fmt::Display for BackendInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBackend(identifier) => {
                write!(f, "unknown backend identifier: {identifier}")
            }
            Self::Load { source, message } => {
                write!(f, "failed to load {source}: {message}")
            }
        }
    }
}

impl std::error::Error for BackendInitError {}

/// Error answering a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The underlying store failed to produce a result page.
    Store(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(message) => write!(f, "backend query failed: {message}"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Resolve a `<identifier>?<configuration>` backend string.
///
/// The registry is a static map from identifier to constructor; nothing is
/// loaded dynamically. A string without `?` is an identifier with an empty
/// configuration.
///
/// # Errors
///
/// Returns an error when the identifier is unknown or the named backend
/// fails to construct from its configuration.
pub fn resolve(raw: &str) -> Result<Arc<dyn Backend>, BackendInitError> {
    let (identifier, config) = raw.split_once('?').unwrap_or((raw, ""));
    let backend: Arc<dyn Backend> = match identifier {
        "memory" => Arc::new(MemoryBackend::from_config(config)?),
        "turtle" => Arc::new(TurtleFileBackend::from_config(config)?),
        other => return Err(BackendInitError::UnknownBackend(other.to_string())),
    };
    tracing::debug!("resolved '{}' backend", backend.name());
    Ok(backend)
}
