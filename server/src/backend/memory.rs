use crate::backend::loader::load_turtle;
use crate::backend::pagination::match_page;
use crate::backend::{Backend, BackendInitError, QueryError};
use crate::types::{Fact, PageResult, TriplePattern};

/// Backend holding its whole fact set in memory.
///
/// The store is immutable after construction, so concurrent queries need
/// no locking and every request sees the same logical snapshot.
pub struct MemoryBackend {
    /// Sorted and deduplicated, the stable query order.
    facts: Vec<Fact>,
}

impl MemoryBackend {
    /// Build a backend from raw facts, sorting and deduplicating them into
    /// the stable query order.
    #[must_use]
    pub fn from_facts(mut facts: Vec<Fact>) -> Self {
        facts.sort();
        facts.dedup();
        Self { facts }
    }

    /// Build a backend from inline Turtle source.
    ///
    /// # Errors
    ///
    /// Returns an error when the source is not valid Turtle.
    pub fn from_turtle(source: &str) -> Result<Self, BackendInitError> {
        Ok(Self {
            facts: load_turtle(source, "inline turtle")?,
        })
    }

    /// Resolve the `memory` backend configuration: the whole configuration
    /// string is inline Turtle source, so an empty configuration is an
    /// empty store.
    pub fn from_config(config: &str) -> Result<Self, BackendInitError> {
        let backend = Self::from_turtle(config)?;
        tracing::info!("memory backend holding {} facts", backend.fact_count());
        Ok(backend)
    }

    /// Number of facts in the store.
    #[must_use]
    pub const fn fact_count(&self) -> usize {
        self.facts.len()
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn query(
        &self,
        pattern: &TriplePattern,
        cursor: Option<&str>,
    ) -> Result<PageResult, QueryError> {
        Ok(match_page(&self.facts, pattern, cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Literal;

    fn all_unbound() -> TriplePattern {
        #[allow(clippy::expect_used)]
        TriplePattern::from_params(None, None, None).expect("pattern should parse")
    }

    #[test]
    fn test_duplicate_facts_collapse() {
        let fact = Fact::resource("http://s", "http://p", "http://o");
        let backend = MemoryBackend::from_facts(vec![fact.clone(), fact.clone(), fact]);
        assert_eq!(backend.fact_count(), 1);
    }

    #[test]
    fn test_query_filters_by_pattern() {
        let backend = MemoryBackend::from_facts(vec![
            Fact::resource("http://a", "http://p", "http://o"),
            Fact::literal("http://b", "http://p", Literal::plain("two")),
        ]);

        #[allow(clippy::expect_used)]
        let pattern = TriplePattern::from_params(Some("http://b"), None, None)
            .expect("pattern should parse");
        #[allow(clippy::expect_used)]
        let page = backend.query(&pattern, None).expect("query should succeed");

        assert_eq!(page.total_matching, 1);
        assert_eq!(page.facts[0].subject, "http://b");
    }

    #[test]
    fn test_query_on_empty_store() {
        let backend = MemoryBackend::from_facts(Vec::new());

        #[allow(clippy::expect_used)]
        let page = backend.query(&all_unbound(), None).expect("query should succeed");

        assert_eq!(page.total_matching, 0);
        assert!(page.facts.is_empty());
        assert_eq!(page.next_cursor, None);
    }
}
