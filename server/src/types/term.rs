//! RDF terms and the typing rules for request parameters.
//!
//! A fragment request names each triple position with a plain string, and
//! the string's shape alone decides what it means:
//!
//! - absent, empty, whitespace-only, or `?`-prefixed input leaves the
//!   position unbound (any variable name after the `?` is discarded),
//! - input starting with `"` is a literal, parsed by the quoted sub-grammar
//!   described on [`Identifier::parse`],
//! - anything else is an IRI, kept verbatim.
//!
//! IRIs are never validated. Rejecting malformed IRIs would reject clients
//! that quote or encode differently than we expect, so an IRI that matches
//! nothing simply selects zero facts.

use std::fmt;

/// A constant data value, optionally annotated with a language tag or a
/// datatype IRI.
///
/// INVARIANT: at most one of `language` and `datatype` is set. A plain
/// literal has neither. All constructors preserve this.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    /// The lexical value, unescaped.
    pub value: String,
    /// Language tag, e.g. `en-gb`. Mutually exclusive with `datatype`.
    pub language: Option<String>,
    /// Datatype IRI, kept verbatim. Mutually exclusive with `language`.
    pub datatype: Option<String>,
}

impl Literal {
    /// A literal with no annotation.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged literal.
    #[must_use]
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    /// A datatyped literal.
    #[must_use]
    pub fn with_datatype(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }
}

/// One position of a triple pattern: a wildcard, a concrete IRI, or a
/// concrete literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// No constraint on this position.
    Unbound,
    /// An IRI, kept verbatim.
    Iri(String),
    /// A constant literal value.
    Literal(Literal),
}

/// Error returned when a request value starts with `"` but does not parse
/// as a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLiteral {
    /// The input that failed to parse.
    pub raw: String,
}

impl fmt::Display for MalformedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid string literal", self.raw)
    }
}

impl std::error::Error for MalformedLiteral {}

impl Identifier {
    /// Type a raw request value.
    ///
    /// The literal sub-grammar is `"<body>"` optionally followed by
    /// `^^<datatype>` or `@<language>`, where `<datatype>` and `<language>`
    /// must be non-empty. The body may itself contain quotes; parsing
    /// anchors on the last closing quote that leaves a structurally valid
    /// suffix, so `"a"b"` is the plain literal `a"b`.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedLiteral`] when the input starts with `"` but no
    /// anchoring succeeds, e.g. an unterminated quote or an empty
    /// language tag.
    pub fn parse(raw: &str) -> Result<Self, MalformedLiteral> {
        if raw.starts_with('?') || raw.trim().is_empty() {
            return Ok(Self::Unbound);
        }
        if raw.starts_with('"') {
            return parse_literal(raw).map(Self::Literal);
        }
        Ok(Self::Iri(raw.to_string()))
    }
}

/// Parse the quoted literal sub-grammar.
///
/// Candidate closing quotes are scanned from the right so that the longest
/// possible body wins, like a greedy `"(.*)"` match.
fn parse_literal(raw: &str) -> Result<Literal, MalformedLiteral> {
    debug_assert!(raw.starts_with('"'));
    let rest = &raw[1..];

    for (index, _) in rest.char_indices().rev().filter(|&(_, c)| c == '"') {
        let body = &rest[..index];
        let suffix = &rest[index + 1..];
        if suffix.is_empty() {
            return Ok(Literal::plain(body));
        }
        if let Some(datatype) = suffix.strip_prefix("^^") {
            if !datatype.is_empty() {
                return Ok(Literal::with_datatype(body, datatype));
            }
        } else if let Some(language) = suffix.strip_prefix('@') {
            if !language.is_empty() {
                return Ok(Literal::with_language(body, language));
            }
        }
    }

    Err(MalformedLiteral {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Identifier {
        #[allow(clippy::expect_used)]
        Identifier::parse(raw).expect("input should parse")
    }

    #[test]
    fn test_empty_is_unbound() {
        assert_eq!(parse(""), Identifier::Unbound);
    }

    #[test]
    fn test_whitespace_is_unbound() {
        assert_eq!(parse("   "), Identifier::Unbound);
        assert_eq!(parse("\t\n"), Identifier::Unbound);
    }

    #[test]
    fn test_question_mark_is_unbound() {
        assert_eq!(parse("?s"), Identifier::Unbound);
        assert_eq!(parse("?"), Identifier::Unbound);
        assert_eq!(parse("?anything at all"), Identifier::Unbound);
    }

    #[test]
    fn test_iri_kept_verbatim() {
        assert_eq!(
            parse("http://example.org/alice"),
            Identifier::Iri("http://example.org/alice".to_string())
        );
    }

    #[test]
    fn test_invalid_iri_still_accepted() {
        // No IRI validation: whatever the client sent is matched as-is.
        assert_eq!(
            parse("not an iri at all"),
            Identifier::Iri("not an iri at all".to_string())
        );
    }

    #[test]
    fn test_leading_whitespace_defeats_variable_check() {
        // Only a leading `?` marks a variable; after padding it is an IRI.
        assert_eq!(parse("  ?s"), Identifier::Iri("  ?s".to_string()));
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(
            parse("\"hello\""),
            Identifier::Literal(Literal::plain("hello"))
        );
    }

    #[test]
    fn test_empty_literal() {
        assert_eq!(parse("\"\""), Identifier::Literal(Literal::plain("")));
    }

    #[test]
    fn test_language_tagged_literal() {
        assert_eq!(
            parse("\"hello\"@en-gb"),
            Identifier::Literal(Literal::with_language("hello", "en-gb"))
        );
    }

    #[test]
    fn test_datatyped_literal() {
        assert_eq!(
            parse("\"42\"^^http://www.w3.org/2001/XMLSchema#integer"),
            Identifier::Literal(Literal::with_datatype(
                "42",
                "http://www.w3.org/2001/XMLSchema#integer",
            ))
        );
    }

    #[test]
    fn test_literal_body_may_contain_quotes() {
        assert_eq!(
            parse("\"a\"b\""),
            Identifier::Literal(Literal::plain("a\"b"))
        );
        assert_eq!(
            parse("\"say \"hi\"\"@en"),
            Identifier::Literal(Literal::with_language("say \"hi\"", "en"))
        );
    }

    #[test]
    fn test_greedy_body_swallows_literal_lookalike_suffix() {
        // The longest body wins, so the `^^` here is part of the value.
        assert_eq!(
            parse("\"a\"^^\"b\""),
            Identifier::Literal(Literal::plain("a\"^^\"b"))
        );
    }

    #[test]
    fn test_unterminated_literal_is_malformed() {
        assert!(Identifier::parse("\"unterminated").is_err());
        assert!(Identifier::parse("\"").is_err());
    }

    #[test]
    fn test_empty_annotation_is_malformed() {
        assert!(Identifier::parse("\"x\"@").is_err());
        assert!(Identifier::parse("\"x\"^^").is_err());
    }

    #[test]
    fn test_trailing_garbage_is_malformed() {
        assert!(Identifier::parse("\"x\"tail").is_err());
        assert!(Identifier::parse("\"x\"^y").is_err());
    }

    #[test]
    fn test_malformed_literal_message_names_input() {
        #[allow(clippy::expect_used)]
        let error = Identifier::parse("\"broken").expect_err("should be malformed");
        assert_eq!(error.to_string(), "\"broken is not a valid string literal");
    }
}
