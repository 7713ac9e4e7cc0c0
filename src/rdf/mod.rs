//! RDF term model and identifier resolution
//!
//! This module provides:
//! - RDF terms and triples (wrappers over oxrdf)
//! - Base-IRI and prefix-table resolution between long IRIs and compact
//!   `prefix:suffix` notation
//! - Conversions from rio parser models (the external-parser boundary)
//!
//! # Example
//!
//! ```rust
//! use rdf_objects::rdf::Namespaces;
//!
//! let ns = Namespaces::new("http://ex.org/")
//!     .unwrap()
//!     .with_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
//!
//! let resolved = ns.resolve("rdf:type").unwrap();
//! assert_eq!(resolved.iri, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(ns.resolve(&resolved.iri).unwrap().compact, "rdf:type");
//! ```

pub mod adapter;
mod namespace;
mod types;

pub use namespace::{NamespaceError, NamespaceResult, Namespaces, ResolvedIri};
pub use types::{BlankNode, Literal, NamedNode, RdfError, RdfResult, RdfTerm, Triple};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_module_exports() {
        let ns = Namespaces::with_well_known("http://example.org/").unwrap();
        let _term: RdfTerm = Literal::new_simple_literal("x").into();
        assert!(ns.resolve("rdf:type").is_some());
    }
}
