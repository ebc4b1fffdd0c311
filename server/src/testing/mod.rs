use crate::types::Fact;

/// Generate `count` distinct facts whose lexicographic order matches
/// their numbering, so page boundaries land on predictable subjects.
///
/// Fact `i` is `<http://example.org/s{i}> <http://example.org/p>
/// <http://example.org/o{i}>` with the number zero-padded to four digits.
pub fn numbered_facts(count: usize) -> Vec<Fact> {
    (0..count)
        .map(|index| {
            Fact::resource(
                format!("http://example.org/s{index:04}"),
                "http://example.org/p",
                format!("http://example.org/o{index:04}"),
            )
        })
        .collect()
}

/// The subject IRI of fact `index` in [`numbered_facts`].
pub fn numbered_subject(index: usize) -> String {
    format!("http://example.org/s{index:04}")
}
