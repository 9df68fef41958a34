//! RDF (Resource Description Framework) support
//!
//! This module provides the pieces a SKOS vocabulary is assembled from:
//! - Validated RDF terms and triples (wrapping oxrdf)
//! - An insertion-ordered in-memory graph
//! - Namespace prefixes for compact IRI notation
//! - Serialization to Turtle and N-Triples (and parsing back)
//!
//! # Example
//!
//! ```rust
//! use skos_vocab::rdf::{Graph, Literal, NamedNode, NamespaceManager, RdfFormat, RdfSerializer};
//! use skos_vocab::rdf::vocab::skos;
//!
//! let mut graph = Graph::new();
//! let animal = NamedNode::new("https://ex.org/v#Animal").unwrap();
//! let pref_label = NamedNode::new(skos::PREF_LABEL).unwrap();
//! let label = Literal::new_language_tagged_literal("Animal", "en").unwrap();
//! graph.add(&animal, &pref_label, label);
//!
//! let namespaces = NamespaceManager::for_vocabulary("https://ex.org/v#");
//! let turtle = RdfSerializer::serialize(&graph, RdfFormat::Turtle, &namespaces).unwrap();
//! assert!(turtle.contains("vocab:Animal skos:prefLabel \"Animal\"@en ."));
//! ```

mod graph;
mod namespace;
mod serialization;
mod types;
pub mod vocab;

pub use types::{Literal, NamedNode, RdfError, RdfObject, RdfResult, Triple};

pub use graph::Graph;

pub use namespace::{Namespace, NamespaceManager};

pub use serialization::{
    ParseError, ParseResult, RdfFormat, RdfParser, RdfSerializer, SerializeError,
    SerializeResult,
};
