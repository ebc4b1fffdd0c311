use crate::types::term::Literal;

/// A concrete value in the object position of a [`Fact`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Term {
    /// A resource reference, or a `_:`-labelled blank node carried over
    /// from source data.
    Iri(String),
    /// A literal value.
    Literal(Literal),
}

/// A subject-predicate-object assertion, readonly.
///
/// INVARIANT: every position holds a concrete value. Facts come only from
/// a backend's store, never from partially-bound request input.
///
/// The derived ordering (subject, then predicate, then object, each
/// lexicographic) is the stable ordering the built-in backends paginate
/// under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fact {
    /// Subject IRI, or a `_:` blank node label from source data.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object value.
    pub object: Term,
}

impl Fact {
    /// A fact whose object is a resource.
    #[must_use]
    pub fn resource(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Iri(object.into()),
        }
    }

    /// A fact whose object is a literal.
    #[must_use]
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Literal,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Term::Literal(object),
        }
    }
}
