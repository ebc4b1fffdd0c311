//! Fixed-size windowing over an ordered match set.
//!
//! Cursors are plain decimal offsets into the ordered match set. While the
//! underlying data is unchanged, increasing cursors partition the matches
//! without duplication or omission.

use crate::types::{Fact, PAGE_SIZE, PageResult, TriplePattern};

/// Slice one page out of the full ordered match set.
///
/// The next cursor is present only when matches remain strictly beyond the
/// returned window, so a last page that is exactly full reports exhaustion.
/// A start offset at or past the end yields an empty page, not an error.
#[must_use]
pub fn paginate(mut all_matches: Vec<Fact>, start: usize) -> PageResult {
    let total = all_matches.len();
    let next_start = start.saturating_add(PAGE_SIZE);
    let next_cursor = (total > next_start).then(|| next_start.to_string());

    let facts = if start >= total {
        Vec::new()
    } else {
        all_matches.truncate(total.min(next_start));
        all_matches.split_off(start)
    };

    PageResult::new(total, next_cursor, facts)
}

/// Decode a pagination cursor into a start offset.
///
/// Anything absent or not a non-negative decimal integer falls back to
/// offset zero; a bad cursor is never a request error.
#[must_use]
pub fn start_offset(cursor: Option<&str>) -> usize {
    cursor.and_then(|raw| raw.parse::<usize>().ok()).unwrap_or(0)
}

/// Filter-then-window step shared by the built-in backends.
///
/// `facts` must already be in the backend's stable order.
#[must_use]
pub fn match_page(facts: &[Fact], pattern: &TriplePattern, cursor: Option<&str>) -> PageResult {
    let matches: Vec<Fact> = facts
        .iter()
        .filter(|fact| pattern.matches(fact))
        .cloned()
        .collect();
    paginate(matches, start_offset(cursor))
}
