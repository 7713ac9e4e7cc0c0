//! RDF namespace and prefix management
//!
//! This module handles the base IRI and namespace prefixes used to move
//! between long IRIs and compact `prefix:suffix` notation. A
//! [`Namespaces`] table is fixed for the lifetime of one graph build.

use indexmap::IndexMap;
use thiserror::Error;

/// Namespace errors
#[derive(Error, Debug)]
pub enum NamespaceError {
    /// Base IRI failed to parse
    #[error("Invalid base IRI {0:?}: {1}")]
    InvalidBase(String, String),
}

pub type NamespaceResult<T> = Result<T, NamespaceError>;

/// A successfully resolved identifier: its primary compact form and its
/// fully expanded long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIri {
    /// Primary compact form: the bare suffix for base-relative IRIs,
    /// otherwise `prefix:suffix`
    pub compact: String,
    /// Fully expanded IRI
    pub iri: String,
}

/// Base IRI plus prefix table.
///
/// The table keeps insertion order: when several namespaces could
/// compact the same IRI, the first entry wins, so resolution stays
/// deterministic. The empty prefix name is reserved and always maps to
/// the base IRI.
#[derive(Debug, Clone)]
pub struct Namespaces {
    /// Base IRI for bare relative identifiers
    base: String,
    /// Prefix name → namespace IRI, in insertion order
    prefixes: IndexMap<String, String>,
}

impl Namespaces {
    /// Create an empty table over a base IRI
    pub fn new(base: impl Into<String>) -> NamespaceResult<Self> {
        let base = base.into();
        oxiri::Iri::parse(base.clone())
            .map_err(|e| NamespaceError::InvalidBase(base.clone(), e.to_string()))?;
        Ok(Self {
            base,
            prefixes: IndexMap::new(),
        })
    }

    /// Create a table pre-loaded with common RDF/RDFS/OWL prefixes
    pub fn with_well_known(base: impl Into<String>) -> NamespaceResult<Self> {
        let mut ns = Self::new(base)?;
        ns.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        ns.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        ns.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        ns.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        ns.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        ns.add_prefix("dc", "http://purl.org/dc/elements/1.1/");
        ns.add_prefix("dcterms", "http://purl.org/dc/terms/");
        Ok(ns)
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Builder-style prefix registration
    pub fn with_prefix(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.add_prefix(prefix, iri);
        self
    }

    /// Get the base IRI
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Get the namespace IRI registered for a prefix
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(|s| s.as_str())
    }

    /// Iterate registered (prefix, namespace) pairs in table order
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Resolve an identifier to its primary compact form and long form.
    ///
    /// Returns `None` when the identifier matches neither the base nor
    /// any registered prefix (an unresolvable identifier is a soft
    /// failure for callers, not an error).
    ///
    /// A colon only acts as a prefix separator when the identifier is
    /// not an absolute URL: `http:`/`https:` schemes and colons inside a
    /// path segment (a slash before the colon) are both left alone.
    pub fn resolve(&self, identifier: &str) -> Option<ResolvedIri> {
        match self.prefix_separator(identifier) {
            None => {
                if let Some(suffix) = identifier.strip_prefix(self.base.as_str()) {
                    return Some(ResolvedIri {
                        compact: suffix.to_string(),
                        iri: identifier.to_string(),
                    });
                }
                for (prefix, namespace) in &self.prefixes {
                    if let Some(suffix) = identifier.strip_prefix(namespace.as_str()) {
                        return Some(ResolvedIri {
                            compact: format!("{}:{}", prefix, suffix),
                            iri: identifier.to_string(),
                        });
                    }
                }
                None
            }
            Some(pos) => {
                let prefix = &identifier[..pos];
                let suffix = &identifier[pos + 1..];
                let namespace = if prefix.is_empty() {
                    self.base.as_str()
                } else {
                    self.prefixes.get(prefix)?.as_str()
                };
                Some(ResolvedIri {
                    compact: identifier.to_string(),
                    iri: format!("{}{}", namespace, suffix),
                })
            }
        }
    }

    /// Expand a compact or relative identifier to its long form
    pub fn expand(&self, identifier: &str) -> Option<String> {
        self.resolve(identifier).map(|r| r.iri)
    }

    /// Compact a long IRI using the first matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.resolve(iri).map(|r| r.compact)
    }

    /// Every compact form of a long IRI: the bare base suffix when the
    /// IRI starts with the base, then `prefix:suffix` for each table
    /// entry whose namespace prefixes it, in table order.
    pub fn compact_forms(&self, iri: &str) -> Vec<String> {
        let mut forms = Vec::new();
        if let Some(suffix) = iri.strip_prefix(self.base.as_str()) {
            forms.push(suffix.to_string());
        }
        for (prefix, namespace) in &self.prefixes {
            if let Some(suffix) = iri.strip_prefix(namespace.as_str()) {
                forms.push(format!("{}:{}", prefix, suffix));
            }
        }
        forms
    }

    /// Position of the colon separating a prefix from its suffix, if
    /// the identifier has one
    fn prefix_separator(&self, identifier: &str) -> Option<usize> {
        if identifier.starts_with("http:") || identifier.starts_with("https:") {
            return None;
        }
        let colon = identifier.find(':')?;
        if let Some(slash) = identifier.find('/') {
            if slash < colon {
                return None;
            }
        }
        Some(colon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    fn table() -> Namespaces {
        Namespaces::new("http://ex.org/")
            .unwrap()
            .with_prefix("rdf", RDF_NS)
            .with_prefix("foaf", "http://xmlns.com/foaf/0.1/")
    }

    #[test]
    fn test_invalid_base_rejected() {
        assert!(Namespaces::new("not an iri").is_err());
    }

    #[test]
    fn test_resolve_compact_form() {
        let ns = table();
        let r = ns.resolve("rdf:type").unwrap();
        assert_eq!(r.compact, "rdf:type");
        assert_eq!(r.iri, format!("{}type", RDF_NS));
    }

    #[test]
    fn test_resolve_long_form() {
        let ns = table();
        let r = ns.resolve(&format!("{}type", RDF_NS)).unwrap();
        assert_eq!(r.compact, "rdf:type");
        assert_eq!(r.iri, format!("{}type", RDF_NS));
    }

    #[test]
    fn test_round_trip_resolution() {
        // prefix:suffix and namespace+suffix must agree on the long form
        let ns = table();
        let via_compact = ns.resolve("foaf:name").unwrap();
        let via_long = ns.resolve("http://xmlns.com/foaf/0.1/name").unwrap();
        assert_eq!(via_compact.iri, via_long.iri);
    }

    #[test]
    fn test_resolve_base_relative() {
        let ns = table();
        let r = ns.resolve("http://ex.org/Alice").unwrap();
        assert_eq!(r.compact, "Alice");
        assert_eq!(r.iri, "http://ex.org/Alice");
    }

    #[test]
    fn test_empty_prefix_maps_to_base() {
        let ns = table();
        let r = ns.resolve(":Alice").unwrap();
        assert_eq!(r.compact, ":Alice");
        assert_eq!(r.iri, "http://ex.org/Alice");
    }

    #[test]
    fn test_unknown_prefix_unresolved() {
        let ns = table();
        assert!(ns.resolve("schema:Person").is_none());
    }

    #[test]
    fn test_unmatched_long_iri_unresolved() {
        let ns = table();
        assert!(ns.resolve("http://other.org/thing").is_none());
    }

    #[test]
    fn test_scheme_colon_is_not_a_separator() {
        // The colon in "http:" belongs to the scheme, so this must go
        // through the namespace scan, not the prefix lookup.
        let ns = table();
        let r = ns.resolve("http://xmlns.com/foaf/0.1/name").unwrap();
        assert_eq!(r.compact, "foaf:name");
    }

    #[test]
    fn test_slash_before_colon_is_not_a_separator() {
        // A colon inside a path segment does not name a prefix.
        let ns = Namespaces::new("http://ex.org/")
            .unwrap()
            .with_prefix("odd", "doc/a");
        let r = ns.resolve("doc/a:b").unwrap();
        assert_eq!(r.compact, "odd::b");
        assert_eq!(r.iri, "doc/a:b");
    }

    #[test]
    fn test_base_precedence_over_matching_prefix() {
        // A prefix whose namespace equals the base must not shadow the
        // base rule: the bare suffix wins as the primary compact form.
        let ns = Namespaces::new("http://ex.org/")
            .unwrap()
            .with_prefix("ex", "http://ex.org/")
            .with_prefix("rdf", RDF_NS);
        let r = ns.resolve("http://ex.org/Alice").unwrap();
        assert_eq!(r.compact, "Alice");
    }

    #[test]
    fn test_first_matching_prefix_wins() {
        let ns = Namespaces::new("http://base.org/")
            .unwrap()
            .with_prefix("a", "http://ex.org/")
            .with_prefix("b", "http://ex.org/");
        let r = ns.resolve("http://ex.org/x").unwrap();
        assert_eq!(r.compact, "a:x");
    }

    #[test]
    fn test_compact_forms_all_aliases() {
        let ns = Namespaces::new("http://ex.org/")
            .unwrap()
            .with_prefix("ex", "http://ex.org/")
            .with_prefix("rdf", RDF_NS);
        let forms = ns.compact_forms("http://ex.org/Alice");
        assert_eq!(forms, vec!["Alice".to_string(), "ex:Alice".to_string()]);

        let forms = ns.compact_forms(&format!("{}type", RDF_NS));
        assert_eq!(forms, vec!["rdf:type".to_string()]);

        assert!(ns.compact_forms("http://other.org/x").is_empty());
    }

    #[test]
    fn test_expand_and_compact() {
        let ns = table();
        assert_eq!(
            ns.expand("rdf:type").as_deref(),
            Some("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")
        );
        assert_eq!(
            ns.compact("http://xmlns.com/foaf/0.1/name").as_deref(),
            Some("foaf:name")
        );
    }

    #[test]
    fn test_well_known_prefixes() {
        let ns = Namespaces::with_well_known("http://ex.org/").unwrap();
        assert_eq!(ns.get_namespace("rdf"), Some(RDF_NS));
        assert_eq!(
            ns.expand("foaf:name").as_deref(),
            Some("http://xmlns.com/foaf/0.1/name")
        );
    }
}
