use crate::types::fact::Fact;

/// Number of facts served on one fragment page.
pub const PAGE_SIZE: usize = 100;

/// One bounded page of matching facts plus the pagination state a client
/// needs to keep going.
///
/// INVARIANT: `facts.len() <= PAGE_SIZE`, checked at construction.
///
/// `total_matching` counts every fact matching the pattern regardless of
/// windowing, and `next_cursor` is present exactly when matches remain
/// beyond this page under the backend's stable ordering. Both are the
/// producing backend's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// Count of all facts matching the pattern.
    pub total_matching: usize,
    /// Opaque start marker for the next page, absent when exhausted.
    pub next_cursor: Option<String>,
    /// The facts on this page, in the backend's stable order.
    pub facts: Vec<Fact>,
}

impl PageResult {
    /// Assemble a page.
    ///
    /// # Panics
    ///
    /// Panics when more than [`PAGE_SIZE`] facts are supplied. Backends
    /// must window before constructing the page.
    #[must_use]
    pub fn new(total_matching: usize, next_cursor: Option<String>, facts: Vec<Fact>) -> Self {
        assert!(
            facts.len() <= PAGE_SIZE,
            "page holds {} facts, more than the page size of {PAGE_SIZE}",
            facts.len()
        );
        Self {
            total_matching,
            next_cursor,
            facts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::numbered_facts;

    #[test]
    fn test_page_within_bound_is_accepted() {
        let page = PageResult::new(250, Some("100".to_string()), numbered_facts(PAGE_SIZE));
        assert_eq!(page.facts.len(), PAGE_SIZE);
        assert_eq!(page.total_matching, 250);
    }

    #[test]
    #[should_panic(expected = "more than the page size")]
    fn test_oversized_page_is_rejected() {
        let _ = PageResult::new(250, None, numbered_facts(PAGE_SIZE + 1));
    }
}
