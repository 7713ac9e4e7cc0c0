//! Conversions from rio parser models into crate terms
//!
//! Parsing serialized RDF is not this crate's job: an external rio-based
//! parser (rio_turtle, rio_xml) produces `rio_api` terms, and these
//! functions turn them into owned [`RdfTerm`]s and [`Triple`]s ready for
//! materialization.

use super::types::{BlankNode, Literal, NamedNode, RdfError, RdfResult, RdfTerm, Triple};

/// Convert a rio subject into a term
pub fn term_from_subject(s: rio_api::model::Subject<'_>) -> RdfResult<RdfTerm> {
    match s {
        rio_api::model::Subject::NamedNode(n) => Ok(RdfTerm::NamedNode(NamedNode::new(n.iri)?)),
        rio_api::model::Subject::BlankNode(b) => Ok(RdfTerm::BlankNode(BlankNode::from_id(b.id)?)),
        _ => Err(RdfError::InvalidIri(
            "RDF-star subjects not supported".to_string(),
        )),
    }
}

/// Convert a rio object term into a term
pub fn term_from_object(o: rio_api::model::Term<'_>) -> RdfResult<RdfTerm> {
    match o {
        rio_api::model::Term::NamedNode(n) => Ok(RdfTerm::NamedNode(NamedNode::new(n.iri)?)),
        rio_api::model::Term::BlankNode(b) => Ok(RdfTerm::BlankNode(BlankNode::from_id(b.id)?)),
        rio_api::model::Term::Literal(l) => Ok(RdfTerm::Literal(literal_from_rio(l)?)),
        _ => Err(RdfError::InvalidIri(
            "RDF-star objects not supported".to_string(),
        )),
    }
}

/// Convert a rio literal into a crate literal
pub fn literal_from_rio(l: rio_api::model::Literal<'_>) -> RdfResult<Literal> {
    match l {
        rio_api::model::Literal::Simple { value } => Ok(Literal::new_simple_literal(value)),
        rio_api::model::Literal::LanguageTaggedString { value, language } => {
            Literal::new_language_tagged_literal(value, language)
        }
        rio_api::model::Literal::Typed { value, datatype } => {
            let dt = NamedNode::new(datatype.iri)?;
            Ok(Literal::new_typed_literal(value, dt))
        }
    }
}

/// Convert a rio triple into an owned crate triple
pub fn triple_from_rio(t: rio_api::model::Triple<'_>) -> RdfResult<Triple> {
    Ok(Triple {
        subject: term_from_subject(t.subject)?,
        predicate: RdfTerm::NamedNode(NamedNode::new(t.predicate.iri)?),
        object: term_from_object(t.object)?,
    })
}
