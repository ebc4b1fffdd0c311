use std::path::Path;

use crate::backend::loader::load_turtle;
use crate::backend::pagination::match_page;
use crate::backend::{Backend, BackendInitError, QueryError};
use crate::types::{Fact, PageResult, TriplePattern};

/// Backend serving a Turtle file read into memory at startup.
///
/// The file is read exactly once. Later changes on disk are not observed
/// until restart, which keeps every page of a fragment on one logical
/// snapshot.
pub struct TurtleFileBackend {
    facts: Vec<Fact>,
}

impl TurtleFileBackend {
    /// Resolve the `turtle` backend configuration: a filesystem path,
    /// optionally in `file://` URI form.
    pub fn from_config(config: &str) -> Result<Self, BackendInitError> {
        Self::open(Path::new(config.strip_prefix("file://").unwrap_or(config)))
    }

    /// Load a Turtle file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid
    /// Turtle.
    pub fn open(path: &Path) -> Result<Self, BackendInitError> {
        let origin = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|error| BackendInitError::Load {
            source: origin.clone(),
            message: error.to_string(),
        })?;
        let facts = load_turtle(&source, &origin)?;
        tracing::info!("loaded {} facts from {origin}", facts.len());
        Ok(Self { facts })
    }

    /// Number of facts in the store.
    #[must_use]
    pub const fn fact_count(&self) -> usize {
        self.facts.len()
    }
}

impl Backend for TurtleFileBackend {
    fn name(&self) -> &'static str {
        "turtle"
    }

    fn query(
        &self,
        pattern: &TriplePattern,
        cursor: Option<&str>,
    ) -> Result<PageResult, QueryError> {
        Ok(match_page(&self.facts, pattern, cursor))
    }
}
