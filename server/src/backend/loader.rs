//! Turtle parsing for the built-in backends.
//!
//! Parsed terms are converted at this boundary into the crate's own model:
//! `xsd:string` and `rdf:langString` annotations are implied by the literal
//! shape and dropped, and blank nodes are carried through as `_:label`
//! strings so source data round-trips into served fragments.

use crate::backend::BackendInitError;
use crate::types::{Fact, Literal, Term};
use crate::vocab;

/// Parse Turtle source into facts in the stable query order.
///
/// The result is sorted and deduplicated: a graph is a set, so repeating a
/// triple in the source must not inflate match counts. `origin` names the
/// source in error messages.
///
/// # Errors
///
/// Returns [`BackendInitError::Load`] when the source is not valid Turtle.
/// Source documents must use absolute IRIs; there is no base to resolve
/// relative ones against.
pub fn load_turtle(source: &str, origin: &str) -> Result<Vec<Fact>, BackendInitError> {
    let mut facts = Vec::new();
    for parsed in oxttl::TurtleParser::new().for_reader(source.as_bytes()) {
        let triple = parsed.map_err(|error| BackendInitError::Load {
            source: origin.to_string(),
            message: error.to_string(),
        })?;
        facts.push(fact_from_triple(triple));
    }
    facts.sort();
    facts.dedup();
    Ok(facts)
}

fn fact_from_triple(triple: oxrdf::Triple) -> Fact {
    Fact {
        subject: subject_string(&triple.subject),
        predicate: triple.predicate.into_string(),
        object: object_term(&triple.object),
    }
}

fn subject_string(subject: &oxrdf::Subject) -> String {
    match subject {
        oxrdf::Subject::NamedNode(node) => node.as_str().to_string(),
        // Display renders the `_:label` form.
        oxrdf::Subject::BlankNode(node) => node.to_string(),
    }
}

fn object_term(object: &oxrdf::Term) -> Term {
    match object {
        oxrdf::Term::NamedNode(node) => Term::Iri(node.as_str().to_string()),
        oxrdf::Term::BlankNode(node) => Term::Iri(node.to_string()),
        oxrdf::Term::Literal(literal) => Term::Literal(convert_literal(literal)),
    }
}

/// Strip the annotations the data model keeps implicit.
fn convert_literal(literal: &oxrdf::Literal) -> Literal {
    if let Some(language) = literal.language() {
        return Literal::with_language(literal.value(), language);
    }
    if literal.datatype().as_str() == vocab::xsd::STRING {
        Literal::plain(literal.value())
    } else {
        Literal::with_datatype(literal.value(), literal.datatype().as_str())
    }
}
