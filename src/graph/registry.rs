//! Deduplicated node registry
//!
//! One arena of [`ObjectNode`] records plus an alias table mapping every
//! equivalent identifier form — long IRI and each compact alias — to the
//! owning arena slot. Whichever form a caller uses, lookups land on the
//! same node.

use super::node::ObjectNode;
use super::types::NodeId;
use crate::rdf::{Literal, NamedNode, Namespaces, RdfTerm};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Registry errors
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Term kind outside the supported data model (e.g. a blank node)
    #[error("Unsupported term kind: {0}")]
    UnsupportedTerm(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Outcome of resolving one term against the registry
#[derive(Debug, Clone, PartialEq)]
pub enum TermBinding {
    /// Named term with a registered node
    Node(NodeId),
    /// Literal scalar, passed through untouched
    Literal(Literal),
    /// Named term that matched neither the base nor any prefix; a
    /// sentinel distinct from any node, carrying the raw term
    Unresolved(NamedNode),
}

impl TermBinding {
    /// Get the node id if the term bound to a node
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            TermBinding::Node(id) => Some(*id),
            _ => None,
        }
    }
}

/// Node store keyed by every equivalent identifier form.
///
/// Nodes are created lazily, the first time any triple mentions their
/// identifier in any position, and are never removed.
#[derive(Debug)]
pub struct NodeRegistry {
    namespaces: Namespaces,
    nodes: Vec<ObjectNode>,
    lookup: FxHashMap<String, NodeId>,
}

impl NodeRegistry {
    /// Create an empty registry over a namespace table
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            nodes: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    /// Get the namespace table this registry resolves against
    pub fn namespaces(&self) -> &Namespaces {
        &self.namespaces
    }

    /// Resolve an identifier to its node, creating the node on first
    /// sight. Returns `None` when the identifier is unresolvable.
    ///
    /// A new node is registered under its long form and every compact
    /// alias, so later lookups under any equivalent form return the
    /// same node. The first registration of a form wins.
    pub fn resolve_node(&mut self, identifier: &str) -> Option<NodeId> {
        let resolved = self.namespaces.resolve(identifier)?;
        if let Some(&id) = self.lookup.get(&resolved.iri) {
            return Some(id);
        }

        let aliases = self.namespaces.compact_forms(&resolved.iri);
        let id = NodeId::new(self.nodes.len() as u64);
        debug!(iri = %resolved.iri, ?aliases, "registering node");

        self.lookup.entry(resolved.iri.clone()).or_insert(id);
        for alias in &aliases {
            self.lookup.entry(alias.clone()).or_insert(id);
        }
        self.nodes.push(ObjectNode::new(id, resolved.iri, aliases));
        Some(id)
    }

    /// Resolve a term: named terms bind to a node or the unresolved
    /// sentinel, literals pass through as scalars, anything else is a
    /// data-model violation.
    pub fn bind_term(&mut self, term: &RdfTerm) -> RegistryResult<TermBinding> {
        match term {
            RdfTerm::NamedNode(named) => Ok(match self.resolve_node(named.as_str()) {
                Some(id) => TermBinding::Node(id),
                None => TermBinding::Unresolved(named.clone()),
            }),
            RdfTerm::Literal(lit) => Ok(TermBinding::Literal(lit.clone())),
            RdfTerm::BlankNode(b) => Err(RegistryError::UnsupportedTerm(b.to_string())),
        }
    }

    /// Look up a node under any of its registered forms, or any
    /// equivalent identifier that resolves to one
    pub fn get(&self, identifier: &str) -> Option<&ObjectNode> {
        if let Some(&id) = self.lookup.get(identifier) {
            return self.nodes.get(id.index());
        }
        let resolved = self.namespaces.resolve(identifier)?;
        let id = self.lookup.get(&resolved.iri)?;
        self.nodes.get(id.index())
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&ObjectNode> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> &ObjectNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut ObjectNode {
        &mut self.nodes[id.index()]
    }

    /// Iterate all nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &ObjectNode> {
        self.nodes.iter()
    }

    /// Number of registered nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
