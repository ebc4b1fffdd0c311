//! IRIs of the vocabularies used in fragment metadata.

/// RDF core vocabulary.
pub mod rdf {
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// `rdf:type`.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:subject`.
    pub const SUBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#subject";
    /// `rdf:predicate`.
    pub const PREDICATE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#predicate";
    /// `rdf:object`.
    pub const OBJECT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#object";
    /// `rdf:langString`, the implicit datatype of language-tagged literals.
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// `VoID` dataset vocabulary.
pub mod void {
    pub const NAMESPACE: &str = "http://rdfs.org/ns/void#";

    /// `void:Dataset`.
    pub const DATASET: &str = "http://rdfs.org/ns/void#Dataset";
    /// `void:subset`.
    pub const SUBSET: &str = "http://rdfs.org/ns/void#subset";
}

/// Hydra hypermedia vocabulary.
pub mod hydra {
    pub const NAMESPACE: &str = "http://www.w3.org/ns/hydra/core#";

    /// `hydra:Collection`.
    pub const COLLECTION: &str = "http://www.w3.org/ns/hydra/core#Collection";
    /// `hydra:search`.
    pub const SEARCH: &str = "http://www.w3.org/ns/hydra/core#search";
    /// `hydra:template`.
    pub const TEMPLATE: &str = "http://www.w3.org/ns/hydra/core#template";
    /// `hydra:mapping`.
    pub const MAPPING: &str = "http://www.w3.org/ns/hydra/core#mapping";
    /// `hydra:variable`.
    pub const VARIABLE: &str = "http://www.w3.org/ns/hydra/core#variable";
    /// `hydra:property`.
    pub const PROPERTY: &str = "http://www.w3.org/ns/hydra/core#property";
    /// `hydra:totalItems`.
    pub const TOTAL_ITEMS: &str = "http://www.w3.org/ns/hydra/core#totalItems";
    /// `hydra:itemsPerPage`.
    pub const ITEMS_PER_PAGE: &str = "http://www.w3.org/ns/hydra/core#itemsPerPage";
    /// `hydra:next`.
    pub const NEXT: &str = "http://www.w3.org/ns/hydra/core#next";
}

/// XML Schema datatypes.
pub mod xsd {
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `xsd:string`, the implicit datatype of plain literals.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}
