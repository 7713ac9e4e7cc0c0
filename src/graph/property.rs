//! Property values for object graph nodes
//!
//! A property holds either a single value or an ordered sequence of
//! values, in triple-arrival order. The single/sequence distinction is
//! observable: one triple on a key leaves a bare scalar, a second triple
//! on the same key promotes it to a sequence exactly once.

use super::types::NodeId;
use crate::rdf::{Literal, NamedNode};
use indexmap::IndexMap;
use std::fmt;

/// One value in a node's property map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectValue {
    /// Reference to another node in the same graph
    Node(NodeId),
    /// Literal scalar, never wrapped in a node
    Literal(Literal),
    /// Named term that matched neither the base nor any prefix; kept
    /// as-is rather than dropped
    Iri(NamedNode),
}

impl ObjectValue {
    /// Get the referenced node id if this is a node value
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            ObjectValue::Node(id) => Some(*id),
            _ => None,
        }
    }

    /// Get the literal if this is a literal value
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            ObjectValue::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// Get the raw IRI if this is an unresolved named value
    pub fn as_iri(&self) -> Option<&NamedNode> {
        match self {
            ObjectValue::Iri(n) => Some(n),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectValue::Node(_) => "Node",
            ObjectValue::Literal(_) => "Literal",
            ObjectValue::Iri(_) => "Iri",
        }
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectValue::Node(id) => write!(f, "{}", id),
            ObjectValue::Literal(l) => write!(f, "{}", l),
            ObjectValue::Iri(n) => write!(f, "{}", n),
        }
    }
}

impl From<NodeId> for ObjectValue {
    fn from(id: NodeId) -> Self {
        ObjectValue::Node(id)
    }
}

impl From<Literal> for ObjectValue {
    fn from(lit: Literal) -> Self {
        ObjectValue::Literal(lit)
    }
}

impl From<NamedNode> for ObjectValue {
    fn from(node: NamedNode) -> Self {
        ObjectValue::Iri(node)
    }
}

/// A property's accumulated value(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single value
    Scalar(ObjectValue),
    /// Values accumulated in arrival order
    Sequence(Vec<ObjectValue>),
}

impl PropertyValue {
    /// Append a value. A scalar becomes a two-element sequence; a
    /// sequence grows. The promotion happens exactly once and never
    /// reverses.
    pub fn push(&mut self, value: ObjectValue) {
        match std::mem::replace(self, PropertyValue::Sequence(Vec::new())) {
            PropertyValue::Scalar(first) => {
                *self = PropertyValue::Sequence(vec![first, value]);
            }
            PropertyValue::Sequence(mut values) => {
                values.push(value);
                *self = PropertyValue::Sequence(values);
            }
        }
    }

    /// Get the single value if this is a scalar
    pub fn as_scalar(&self) -> Option<&ObjectValue> {
        match self {
            PropertyValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Get the value slice if this is a sequence
    pub fn as_sequence(&self) -> Option<&[ObjectValue]> {
        match self {
            PropertyValue::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// Iterate the value(s) uniformly
    pub fn iter(&self) -> impl Iterator<Item = &ObjectValue> {
        match self {
            PropertyValue::Scalar(v) => std::slice::from_ref(v).iter(),
            PropertyValue::Sequence(values) => values.iter(),
        }
    }

    /// Number of accumulated values
    pub fn len(&self) -> usize {
        match self {
            PropertyValue::Scalar(_) => 1,
            PropertyValue::Sequence(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ObjectValue> for PropertyValue {
    fn from(value: ObjectValue) -> Self {
        PropertyValue::Scalar(value)
    }
}

/// Per-node mapping from property key to accumulated value(s), in
/// first-seen key order
pub type PropertyMap = IndexMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> ObjectValue {
        ObjectValue::Literal(Literal::new_simple_literal(s))
    }

    #[test]
    fn test_scalar_first() {
        // A single value stays a bare scalar, not a one-element sequence
        let value = PropertyValue::from(lit("a"));
        assert!(value.as_scalar().is_some());
        assert!(value.as_sequence().is_none());
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_promotes_to_sequence_once() {
        let mut value = PropertyValue::from(lit("a"));
        value.push(lit("b"));

        let seq = value.as_sequence().unwrap();
        assert_eq!(seq, &[lit("a"), lit("b")]);

        // Third value appends; no regression to scalar
        value.push(lit("c"));
        assert_eq!(value.as_sequence().unwrap().len(), 3);
    }

    #[test]
    fn test_arrival_order_preserved() {
        let mut value = PropertyValue::from(lit("first"));
        value.push(lit("second"));
        value.push(lit("third"));

        let order: Vec<&str> = value
            .iter()
            .map(|v| v.as_literal().unwrap().value())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_object_value_accessors() {
        let node = ObjectValue::Node(NodeId::new(3));
        assert_eq!(node.as_node(), Some(NodeId::new(3)));
        assert_eq!(node.type_name(), "Node");
        assert!(node.as_literal().is_none());

        let iri = ObjectValue::Iri(NamedNode::new("http://other.org/x").unwrap());
        assert_eq!(iri.as_iri().unwrap().as_str(), "http://other.org/x");
    }

    #[test]
    fn test_property_map_keeps_key_order() {
        let mut map = PropertyMap::new();
        map.insert("b".to_string(), PropertyValue::from(lit("1")));
        map.insert("a".to_string(), PropertyValue::from(lit("2")));

        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
