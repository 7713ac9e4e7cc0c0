//! Node record for the object graph

use super::property::{ObjectValue, PropertyMap, PropertyValue};
use super::types::NodeId;

/// A materialized resource.
///
/// A node is created the first time its identifier appears in any triple
/// position and is then mutated in place as triples reference it as
/// subject. Its canonical long IRI is the identity key; the alias list
/// holds every compact form it is reachable under, primary form first.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    /// Arena slot of this node
    pub id: NodeId,

    /// Canonical long IRI
    iri: String,

    /// Compact forms, primary first (bare base suffix when the IRI is
    /// base-relative, otherwise the first `prefix:suffix` match)
    aliases: Vec<String>,

    /// Property key → accumulated value(s), in first-seen key order
    properties: PropertyMap,
}

impl ObjectNode {
    pub(crate) fn new(id: NodeId, iri: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            id,
            iri: iri.into(),
            aliases,
            properties: PropertyMap::new(),
        }
    }

    /// Get the canonical long IRI
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// Get every compact alias, primary form first
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Get the primary compact form, if the node has one
    pub fn primary_alias(&self) -> Option<&str> {
        self.aliases.first().map(|s| s.as_str())
    }

    /// Bare suffix relative to `base`, when this node lives under it
    pub fn local_name<'a>(&'a self, base: &str) -> Option<&'a str> {
        self.iri.strip_prefix(base)
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Check if property exists
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Iterate properties in first-seen key order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub(crate) fn fold_value(&mut self, key: String, value: ObjectValue) {
        match self.properties.entry(key) {
            indexmap::map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(PropertyValue::Scalar(value));
            }
        }
    }
}
