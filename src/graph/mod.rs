//! Object graph: nodes, registry, and triple materialization
//!
//! This module turns an ordered triple sequence into a deduplicated,
//! alias-addressable node graph:
//! - Every named identifier becomes exactly one [`ObjectNode`],
//!   reachable under its long IRI and every compact alias
//! - Every triple folds into its subject node's ordered property map,
//!   accumulating repeated keys into sequences in arrival order
//! - Soft failures (unresolvable identifiers) degrade single triples;
//!   structural failures (blank nodes, literal predicates) abort the
//!   build
//!
//! # Example
//!
//! ```rust
//! use rdf_objects::graph::Materializer;
//! use rdf_objects::rdf::{NamedNode, Namespaces, Triple};
//!
//! let ns = Namespaces::new("http://ex.org/")
//!     .unwrap()
//!     .with_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
//!
//! let triples = vec![Triple::new(
//!     NamedNode::new("http://ex.org/Alice").unwrap(),
//!     NamedNode::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").unwrap(),
//!     NamedNode::new("http://ex.org/Person").unwrap(),
//! )];
//!
//! let graph = Materializer::new(ns).materialize(triples).unwrap();
//! let alice = graph.get("Alice").unwrap();
//! assert!(alice.has_property("rdf:type"));
//! ```

mod materialize;
mod node;
mod property;
mod registry;
mod types;

pub use materialize::{
    BuildConfig, BuildError, BuildResult, Materializer, ObjectGraph, UnresolvedPredicate,
};
pub use node::ObjectNode;
pub use property::{ObjectValue, PropertyMap, PropertyValue};
pub use registry::{NodeRegistry, RegistryError, RegistryResult, TermBinding};
pub use types::NodeId;
