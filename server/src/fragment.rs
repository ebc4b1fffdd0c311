//! Hypermedia composition of fragment documents.
//!
//! A fragment is more than the page of facts: it carries the metadata a
//! client needs to keep navigating without out-of-band knowledge. The
//! composer emits, after the facts themselves,
//!
//! - the dataset node, typed `void:Dataset` and `hydra:Collection`, with a
//!   `void:subset` arc to the current request,
//! - the match count and page size on the request node, plus a
//!   `hydra:next` link while matches remain,
//! - the constant `{?s,p,o}` search template with one mapping per
//!   position.
//!
//! The metadata always describes the whole fragment, so a client landing
//! on any page, including an empty one, can reach every other page.

use crate::turtle;
use crate::types::{Fact, Literal, PageResult, Term};
use crate::vocab::{hydra, rdf, void, xsd};

/// A node of the emitted graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A resource reference.
    Iri(String),
    /// A document-scoped blank node.
    Blank(&'static str),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    #[must_use]
    pub fn iri(value: impl Into<String>) -> Self {
        Self::Iri(value.into())
    }

    fn integer(value: usize) -> Self {
        Self::Literal(Literal::with_datatype(value.to_string(), xsd::INTEGER))
    }
}

/// One emitted statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub subject: Node,
    pub predicate: String,
    pub object: Node,
}

impl Statement {
    #[must_use]
    pub fn new(subject: Node, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

/// A composed fragment document: the page's facts followed by the
/// hypermedia metadata, in a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDocument {
    statements: Vec<Statement>,
}

impl FragmentDocument {
    /// The document's statements in emission order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Serialize the document as Turtle.
    #[must_use]
    pub fn to_turtle(&self) -> String {
        turtle::write_document(&self.statements)
    }
}

/// Wrap one result page in its fragment metadata.
///
/// `root_uri` identifies the fragment interface itself, `request_uri` the
/// page being answered. `next_page_uri` is emitted as `hydra:next` only
/// while `page.next_cursor` reports more matches; passing a URI alongside
/// an exhausted page emits nothing.
#[must_use]
pub fn compose(
    root_uri: &str,
    request_uri: &str,
    page: &PageResult,
    next_page_uri: Option<&str>,
) -> FragmentDocument {
    let dataset = Node::iri(format!("{root_uri}#dataset"));
    let request = Node::iri(escape_fragment_marker(request_uri));
    let template = Node::Blank("template");

    let mut statements: Vec<Statement> = page.facts.iter().map(fact_statement).collect();

    statements.push(Statement::new(dataset.clone(), rdf::TYPE, Node::iri(void::DATASET)));
    statements.push(Statement::new(dataset.clone(), rdf::TYPE, Node::iri(hydra::COLLECTION)));
    statements.push(Statement::new(dataset.clone(), void::SUBSET, request.clone()));

    statements.push(Statement::new(
        request.clone(),
        hydra::TOTAL_ITEMS,
        Node::integer(page.total_matching),
    ));
    statements.push(Statement::new(
        request.clone(),
        hydra::ITEMS_PER_PAGE,
        Node::integer(page.facts.len()),
    ));
    if let (Some(_), Some(next)) = (&page.next_cursor, next_page_uri) {
        statements.push(Statement::new(
            request,
            hydra::NEXT,
            Node::iri(escape_fragment_marker(next)),
        ));
    }

    statements.push(Statement::new(dataset, hydra::SEARCH, template.clone()));
    statements.push(Statement::new(
        template.clone(),
        hydra::TEMPLATE,
        Node::Literal(Literal::plain(format!("{root_uri}{{?s,p,o}}"))),
    ));
    for (label, variable, property) in [
        ("mapping-s", "s", rdf::SUBJECT),
        ("mapping-p", "p", rdf::PREDICATE),
        ("mapping-o", "o", rdf::OBJECT),
    ] {
        let mapping = Node::Blank(label);
        statements.push(Statement::new(template.clone(), hydra::MAPPING, mapping.clone()));
        statements.push(Statement::new(
            mapping.clone(),
            hydra::VARIABLE,
            Node::Literal(Literal::plain(variable)),
        ));
        statements.push(Statement::new(mapping, hydra::PROPERTY, Node::iri(property)));
    }

    FragmentDocument { statements }
}

fn fact_statement(fact: &Fact) -> Statement {
    let object = match &fact.object {
        Term::Iri(iri) => Node::Iri(iri.clone()),
        Term::Literal(literal) => Node::Literal(literal.clone()),
    };
    Statement::new(Node::Iri(fact.subject.clone()), &fact.predicate, object)
}

/// Escape `#` in an echoed URI. Without this, writing the URI into the
/// document would truncate it at the fragment marker when read back.
fn escape_fragment_marker(uri: &str) -> String {
    uri.replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageResult;

    const ROOT: &str = "http://fragments.test/";

    fn count_matching(document: &FragmentDocument, predicate: &str) -> usize {
        document
            .statements()
            .iter()
            .filter(|statement| statement.predicate == predicate)
            .count()
    }

    fn find_object(document: &FragmentDocument, predicate: &str) -> Option<Node> {
        document
            .statements()
            .iter()
            .find(|statement| statement.predicate == predicate)
            .map(|statement| statement.object.clone())
    }

    #[test]
    fn test_dataset_and_collection_typing() {
        let page = PageResult::new(0, None, Vec::new());
        let document = compose(ROOT, ROOT, &page, None);

        let types: Vec<&Node> = document
            .statements()
            .iter()
            .filter(|statement| statement.predicate == rdf::TYPE)
            .map(|statement| &statement.object)
            .collect();
        assert_eq!(
            types,
            vec![&Node::iri(void::DATASET), &Node::iri(hydra::COLLECTION)]
        );

        assert_eq!(find_object(&document, void::SUBSET), Some(Node::iri(ROOT)));
    }

    #[test]
    fn test_counts_reflect_page_and_total() {
        let facts = crate::testing::numbered_facts(3);
        let page = PageResult::new(250, Some("100".to_string()), facts);
        let document = compose(ROOT, ROOT, &page, Some("http://fragments.test/?start=100"));

        assert_eq!(
            find_object(&document, hydra::TOTAL_ITEMS),
            Some(Node::integer(250))
        );
        assert_eq!(
            find_object(&document, hydra::ITEMS_PER_PAGE),
            Some(Node::integer(3))
        );
        assert_eq!(
            find_object(&document, hydra::NEXT),
            Some(Node::iri("http://fragments.test/?start=100"))
        );
    }

    #[test]
    fn test_exhausted_page_has_no_next_link() {
        let page = PageResult::new(3, None, crate::testing::numbered_facts(3));
        // Even a caller-supplied URI must not leak into an exhausted page.
        let document = compose(ROOT, ROOT, &page, Some("http://fragments.test/?start=100"));

        assert_eq!(count_matching(&document, hydra::NEXT), 0);
    }

    #[test]
    fn test_facts_come_before_metadata() {
        let facts = crate::testing::numbered_facts(2);
        let page = PageResult::new(2, None, facts.clone());
        let document = compose(ROOT, ROOT, &page, None);

        assert_eq!(
            document.statements()[0].subject,
            Node::Iri(facts[0].subject.clone())
        );
        assert_eq!(
            document.statements()[1].subject,
            Node::Iri(facts[1].subject.clone())
        );
        assert_eq!(document.statements()[2].predicate, rdf::TYPE);
    }

    #[test]
    fn test_search_template_is_constant() {
        let page = PageResult::new(0, None, Vec::new());
        let document = compose(ROOT, "http://fragments.test/?s=x", &page, None);

        assert_eq!(
            find_object(&document, hydra::TEMPLATE),
            Some(Node::Literal(Literal::plain("http://fragments.test/{?s,p,o}")))
        );
        assert_eq!(count_matching(&document, hydra::MAPPING), 3);

        let variables: Vec<Node> = document
            .statements()
            .iter()
            .filter(|statement| statement.predicate == hydra::VARIABLE)
            .map(|statement| statement.object.clone())
            .collect();
        assert_eq!(
            variables,
            vec![
                Node::Literal(Literal::plain("s")),
                Node::Literal(Literal::plain("p")),
                Node::Literal(Literal::plain("o")),
            ]
        );

        let properties: Vec<Node> = document
            .statements()
            .iter()
            .filter(|statement| statement.predicate == hydra::PROPERTY)
            .map(|statement| statement.object.clone())
            .collect();
        assert_eq!(
            properties,
            vec![
                Node::iri(rdf::SUBJECT),
                Node::iri(rdf::PREDICATE),
                Node::iri(rdf::OBJECT),
            ]
        );
    }

    #[test]
    fn test_request_uri_fragment_marker_is_escaped() {
        let page = PageResult::new(0, None, Vec::new());
        let request = "http://fragments.test/?s=http://x/y#z";
        let document = compose(ROOT, request, &page, None);

        assert_eq!(
            find_object(&document, void::SUBSET),
            Some(Node::iri("http://fragments.test/?s=http://x/y%23z"))
        );
    }

    #[test]
    fn test_dataset_node_keeps_its_fragment_marker() {
        let page = PageResult::new(0, None, Vec::new());
        let document = compose(ROOT, ROOT, &page, None);

        assert_eq!(
            document.statements().first().map(|s| s.subject.clone()),
            Some(Node::iri("http://fragments.test/#dataset"))
        );
    }
}
