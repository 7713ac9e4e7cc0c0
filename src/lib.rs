//! rdf-objects
//!
//! An in-memory object graph over RDF triples. An external parser
//! supplies subject/predicate/object triples; this crate resolves every
//! identifier against a base IRI and a prefix table, interns one node
//! per distinct resource, and folds each triple into its subject node's
//! property map. The finished graph is read-only and queryable under
//! any equivalent identifier form, long or compact.
//!
//! # Architecture
//!
//! - [`rdf`] — term model (oxrdf wrappers), base/prefix identifier
//!   resolution, and rio parser-model conversions
//! - [`graph`] — node registry (arena + alias table) and the one-pass
//!   triple materializer
//!
//! Data flows one way: triples → materializer → registry → read-only
//! [`graph::ObjectGraph`].
//!
//! # Example
//!
//! ```rust
//! use rdf_objects::graph::Materializer;
//! use rdf_objects::rdf::{Literal, NamedNode, Namespaces, Triple};
//!
//! let ns = Namespaces::with_well_known("http://ex.org/").unwrap();
//!
//! let alice = NamedNode::new("http://ex.org/Alice").unwrap();
//! let name = NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let triples = vec![Triple::new(alice, name, Literal::new_simple_literal("Alice"))];
//!
//! let graph = Materializer::new(ns).materialize(triples).unwrap();
//!
//! // The node is reachable by its long IRI and its bare base suffix
//! let node = graph.get("Alice").unwrap();
//! assert_eq!(node.iri(), "http://ex.org/Alice");
//! let name = node.get_property("foaf:name").unwrap();
//! assert_eq!(name.as_scalar().unwrap().as_literal().unwrap().value(), "Alice");
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod rdf;

// Re-export main types for convenience
pub use graph::{
    BuildConfig, BuildError, BuildResult, Materializer, NodeId, NodeRegistry, ObjectGraph,
    ObjectNode, ObjectValue, PropertyMap, PropertyValue, TermBinding, UnresolvedPredicate,
};

pub use rdf::{
    BlankNode, Literal, NamedNode, NamespaceError, Namespaces, RdfError, RdfResult, RdfTerm,
    ResolvedIri, Triple,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
