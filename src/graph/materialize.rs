//! Triple-to-graph materialization
//!
//! A [`Materializer`] makes one pass over an ordered triple sequence,
//! folding each triple into its subject node. Consuming the materializer
//! yields a read-only [`ObjectGraph`]; there is no way back to the
//! building state and no mutation protocol afterwards, so a finished
//! graph can be shared freely across readers.
//!
//! Failure policy: an unresolvable identifier degrades only the triple
//! it appears in, while a structural violation (blank node anywhere, a
//! literal used as predicate) aborts the whole build — a partially
//! correct graph is never returned.

use super::node::ObjectNode;
use super::property::{ObjectValue, PropertyValue};
use super::registry::{NodeRegistry, RegistryError, TermBinding};
use super::types::NodeId;
use crate::rdf::{Namespaces, RdfTerm, Triple};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

/// Build errors: each identifies the offending triple and failure kind
#[derive(Error, Debug)]
pub enum BuildError {
    /// A term kind outside the data model (e.g. a blank node)
    #[error("Triple {index}: unsupported term kind {term}")]
    UnsupportedTerm {
        /// Position of the triple in the source sequence
        index: usize,
        /// Display form of the offending term
        term: String,
    },

    /// The predicate is not a named term
    #[error("Triple {index}: predicate must be a named term, got {predicate}")]
    MalformedPredicate {
        /// Position of the triple in the source sequence
        index: usize,
        /// Display form of the offending predicate
        predicate: String,
    },
}

pub type BuildResult<T> = Result<T, BuildError>;

/// What to do with a triple whose predicate matches neither the base
/// nor any prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnresolvedPredicate {
    /// Use the predicate's raw IRI string as the property key
    #[default]
    UseRawIri,
    /// Drop the triple
    SkipTriple,
}

/// Materialization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Policy for unresolvable predicates
    pub unresolved_predicate: UnresolvedPredicate,
}

/// One-pass graph builder.
///
/// Nodes are created lazily for every named term encountered, in any
/// triple position, even in triples that end up dropped.
#[derive(Debug)]
pub struct Materializer {
    registry: NodeRegistry,
    config: BuildConfig,
    folded: usize,
    dropped: usize,
}

impl Materializer {
    /// Create a materializer over a namespace table
    pub fn new(namespaces: Namespaces) -> Self {
        Self::with_config(namespaces, BuildConfig::default())
    }

    /// Create a materializer with an explicit configuration
    pub fn with_config(namespaces: Namespaces, config: BuildConfig) -> Self {
        Self {
            registry: NodeRegistry::new(namespaces),
            config,
            folded: 0,
            dropped: 0,
        }
    }

    /// Consume the triple sequence in source order and finish the graph.
    ///
    /// Returns the complete graph, or the first structural error; there
    /// is no partial-success value.
    pub fn materialize<I>(mut self, triples: I) -> BuildResult<ObjectGraph>
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut total = 0;
        for (index, triple) in triples.into_iter().enumerate() {
            self.apply(index, &triple)?;
            total = index + 1;
        }
        info!(
            triples = total,
            nodes = self.registry.len(),
            folded = self.folded,
            dropped = self.dropped,
            "materialized object graph"
        );
        Ok(ObjectGraph {
            registry: self.registry,
        })
    }

    fn apply(&mut self, index: usize, triple: &Triple) -> BuildResult<()> {
        // All three terms are bound first: node creation is lazy on any
        // mention, and a blank node anywhere aborts even when the
        // triple would be dropped below.
        let subject = self.bind(index, &triple.subject)?;
        let predicate = self.bind(index, &triple.predicate)?;
        let object = self.bind(index, &triple.object)?;

        let subject_id = match subject.as_node() {
            Some(id) => id,
            None => {
                debug!(index, %triple, "dropping triple: subject is not a node");
                self.dropped += 1;
                return Ok(());
            }
        };

        let key = match predicate {
            TermBinding::Node(id) => {
                // Shortest identity: the primary compact form
                let node = self.registry.node_ref(id);
                node.primary_alias().unwrap_or(node.iri()).to_string()
            }
            TermBinding::Literal(lit) => {
                return Err(BuildError::MalformedPredicate {
                    index,
                    predicate: lit.to_string(),
                })
            }
            TermBinding::Unresolved(named) => match self.config.unresolved_predicate {
                UnresolvedPredicate::UseRawIri => named.as_str().to_string(),
                UnresolvedPredicate::SkipTriple => {
                    debug!(index, %triple, "dropping triple: unresolvable predicate");
                    self.dropped += 1;
                    return Ok(());
                }
            },
        };

        let value = match object {
            TermBinding::Node(id) => ObjectValue::Node(id),
            TermBinding::Literal(lit) => ObjectValue::Literal(lit),
            TermBinding::Unresolved(named) => ObjectValue::Iri(named),
        };

        self.registry.node_mut(subject_id).fold_value(key, value);
        self.folded += 1;
        Ok(())
    }

    fn bind(&mut self, index: usize, term: &RdfTerm) -> BuildResult<TermBinding> {
        self.registry.bind_term(term).map_err(|err| match err {
            RegistryError::UnsupportedTerm(term) => BuildError::UnsupportedTerm { index, term },
        })
    }
}

/// A finished, read-only object graph.
///
/// Queryable under any equivalent identifier form; shares the registry's
/// node arena and exposes no mutation.
#[derive(Debug)]
pub struct ObjectGraph {
    registry: NodeRegistry,
}

impl ObjectGraph {
    /// Look up a node under any equivalent identifier form
    pub fn get(&self, identifier: &str) -> Option<&ObjectNode> {
        self.registry.get(identifier)
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&ObjectNode> {
        self.registry.node(id)
    }

    /// Iterate all nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &ObjectNode> {
        self.registry.nodes()
    }

    /// Nodes whose IRI lives directly under the base
    pub fn local_nodes(&self) -> impl Iterator<Item = &ObjectNode> {
        let base = self.registry.namespaces().base();
        self.registry
            .nodes()
            .filter(move |node| node.iri().starts_with(base))
    }

    /// Get the namespace table the graph was built against
    pub fn namespaces(&self) -> &Namespaces {
        self.registry.namespaces()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Project the graph to JSON for presentation consumers: nodes
    /// keyed by long IRI, literals as lexical values, node references
    /// as long IRIs.
    pub fn to_json(&self) -> serde_json::Value {
        let mut nodes = serde_json::Map::new();
        for node in self.registry.nodes() {
            let mut properties = serde_json::Map::new();
            for (key, value) in node.properties() {
                let rendered = match value {
                    PropertyValue::Scalar(v) => self.value_to_json(v),
                    PropertyValue::Sequence(vs) => {
                        json!(vs.iter().map(|v| self.value_to_json(v)).collect::<Vec<_>>())
                    }
                };
                properties.insert(key.to_string(), rendered);
            }
            nodes.insert(
                node.iri().to_string(),
                json!({
                    "aliases": node.aliases(),
                    "properties": properties,
                }),
            );
        }
        serde_json::Value::Object(nodes)
    }

    fn value_to_json(&self, value: &ObjectValue) -> serde_json::Value {
        match value {
            ObjectValue::Node(id) => match self.registry.node(*id) {
                Some(node) => json!(node.iri()),
                None => serde_json::Value::Null,
            },
            ObjectValue::Literal(lit) => json!(lit.value()),
            ObjectValue::Iri(named) => json!(named.as_str()),
        }
    }
}
