use crate::types::fact::{Fact, Term};
use crate::types::term::{Identifier, MalformedLiteral};

/// A triple where each position may be concrete or left open.
///
/// No invariant couples the positions: all-unbound (select everything) and
/// all-bound (existence check) are both legal patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: Identifier,
    pub predicate: Identifier,
    pub object: Identifier,
}

impl TriplePattern {
    /// Build a pattern from the raw `s`, `p` and `o` request parameters.
    /// An absent parameter is typed like an empty string, i.e. unbound.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedLiteral`] when any position carries a `"`-led
    /// value that does not parse as a literal.
    pub fn from_params(
        s: Option<&str>,
        p: Option<&str>,
        o: Option<&str>,
    ) -> Result<Self, MalformedLiteral> {
        Ok(Self {
            subject: Identifier::parse(s.unwrap_or(""))?,
            predicate: Identifier::parse(p.unwrap_or(""))?,
            object: Identifier::parse(o.unwrap_or(""))?,
        })
    }

    /// Whether a concrete fact satisfies every bound position.
    #[must_use]
    pub fn matches(&self, fact: &Fact) -> bool {
        matches_resource(&self.subject, &fact.subject)
            && matches_resource(&self.predicate, &fact.predicate)
            && matches_object(&self.object, &fact.object)
    }
}

/// Match one pattern position against a subject or predicate IRI.
///
/// A literal identifier can never equal a resource, so a pattern with a
/// literal subject or predicate matches nothing rather than erroring.
fn matches_resource(identifier: &Identifier, iri: &str) -> bool {
    match identifier {
        Identifier::Unbound => true,
        Identifier::Iri(value) => value == iri,
        Identifier::Literal(_) => false,
    }
}

/// Match one pattern position against an object term.
fn matches_object(identifier: &Identifier, term: &Term) -> bool {
    match identifier {
        Identifier::Unbound => true,
        Identifier::Iri(value) => matches!(term, Term::Iri(iri) if iri == value),
        Identifier::Literal(literal) => {
            matches!(term, Term::Literal(other) if other == literal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::term::Literal;

    fn pattern(s: Option<&str>, p: Option<&str>, o: Option<&str>) -> TriplePattern {
        #[allow(clippy::expect_used)]
        TriplePattern::from_params(s, p, o).expect("pattern should parse")
    }

    fn sample_fact() -> Fact {
        Fact::resource(
            "http://example.org/alice",
            "http://xmlns.com/foaf/0.1/knows",
            "http://example.org/bob",
        )
    }

    #[test]
    fn test_all_unbound_matches_everything() {
        let all = pattern(None, None, None);
        assert!(all.matches(&sample_fact()));
        assert!(all.matches(&Fact::literal(
            "http://s",
            "http://p",
            Literal::with_language("hi", "en"),
        )));
    }

    #[test]
    fn test_absent_and_variable_parameters_are_equivalent() {
        assert_eq!(
            pattern(None, None, None),
            pattern(Some("?s"), Some(""), Some("  "))
        );
    }

    #[test]
    fn test_bound_subject_filters() {
        let by_subject = pattern(Some("http://example.org/alice"), None, None);
        assert!(by_subject.matches(&sample_fact()));

        let other = pattern(Some("http://example.org/carol"), None, None);
        assert!(!other.matches(&sample_fact()));
    }

    #[test]
    fn test_literal_object_requires_structural_equality() {
        let fact = Fact::literal("http://s", "http://p", Literal::with_language("hi", "en"));

        assert!(pattern(None, None, Some("\"hi\"@en")).matches(&fact));
        assert!(!pattern(None, None, Some("\"hi\"")).matches(&fact));
        assert!(!pattern(None, None, Some("\"hi\"@fr")).matches(&fact));
        assert!(!pattern(None, None, Some("\"hi\"^^http://t")).matches(&fact));
    }

    #[test]
    fn test_iri_object_does_not_match_literal_object() {
        let fact = Fact::literal("http://s", "http://p", Literal::plain("http://o"));
        assert!(!pattern(None, None, Some("http://o")).matches(&fact));
    }

    #[test]
    fn test_literal_subject_matches_nothing() {
        let impossible = pattern(Some("\"alice\""), None, None);
        assert!(!impossible.matches(&sample_fact()));
    }
}
