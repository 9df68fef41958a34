//! RDF type definitions
//!
//! Thin wrappers around the oxrdf primitives. Constructing a term through
//! these wrappers validates it, so every triple in a [`Graph`](super::Graph)
//! is well-formed by construction.

use oxrdf::{Literal as OxLiteral, NamedNode as OxNamedNode};
use std::fmt;
use thiserror::Error;

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// RDF errors
#[derive(Error, Debug)]
pub enum RdfError {
    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Invalid language tag
    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Create a new named node from an IRI string
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        let iri = iri.into();
        OxNamedNode::new(iri.clone())
            .map(Self)
            .map_err(|e| RdfError::InvalidIri(format!("{iri} ({e})")))
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

/// RDF literal value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Create a simple literal (plain string)
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    /// Create a literal with language tag
    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> RdfResult<Self> {
        let language = language.into();
        OxLiteral::new_language_tagged_literal(value, language.clone())
            .map(Self)
            .map_err(|e| RdfError::InvalidLanguageTag(format!("{language} ({e})")))
    }

    /// Create a literal tagged with `language`, or a plain literal when no tag is given
    pub fn new_with_optional_language(
        value: impl Into<String>,
        language: Option<&str>,
    ) -> RdfResult<Self> {
        match language {
            Some(lang) => Self::new_language_tagged_literal(value, lang),
            None => Ok(Self::new_simple_literal(value)),
        }
    }

    /// Create a typed literal
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Get the language tag if present
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// Get the datatype IRI, `None` for plain and language-tagged literals
    pub fn datatype(&self) -> Option<&str> {
        if self.language().is_some() {
            return None;
        }
        let datatype = self.0.datatype().as_str();
        if datatype == XSD_STRING {
            None
        } else {
            Some(datatype)
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// RDF object (NamedNode or Literal)
///
/// Concept schemes never need blank nodes, so they are not representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    /// Named node (IRI)
    NamedNode(NamedNode),
    /// Literal value
    Literal(Literal),
}

impl RdfObject {
    /// The literal, if this object is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            RdfObject::Literal(l) => Some(l),
            RdfObject::NamedNode(_) => None,
        }
    }

    /// The named node, if this object is one
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfObject::NamedNode(n) => Some(n),
            RdfObject::Literal(_) => None,
        }
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfObject::NamedNode(n) => write!(f, "{}", n),
            RdfObject::Literal(l) => write!(f, "{}", l),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(lit: Literal) -> Self {
        RdfObject::Literal(lit)
    }
}

/// RDF triple (subject-predicate-object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject
    pub subject: NamedNode,
    /// Predicate
    pub predicate: NamedNode,
    /// Object
    pub object: RdfObject,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: NamedNode, predicate: NamedNode, object: impl Into<RdfObject>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
