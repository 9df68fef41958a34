//! SKOS vocabulary builder
//!
//! Converts a tabular (CSV) vocabulary definition into a SKOS taxonomy and
//! writes it as Turtle (or N-Triples).
//!
//! # Architecture
//!
//! - [`rdf`]: RDF terms, an in-memory graph, namespaces and serializers
//! - [`vocabulary`]: CSV ingestion and the concept scheme builder
//!
//! A run is a single synchronous pass: read the whole table, build the
//! graph, serialize it, write one file.
//!
//! ## Example Usage
//!
//! ```rust
//! use skos_vocab::{convert_reader, VocabularyConfig};
//!
//! let csv = "ID,prefLabel,altLabel,broader\n\
//!            A,Animal,,\n\
//!            B,Dog,\"hound, pooch\",A\n";
//!
//! let config = VocabularyConfig::new("https://ex.org/v#").with_scheme_label("Animals");
//! let (turtle, report) = convert_reader(csv.as_bytes(), &config).unwrap();
//!
//! assert_eq!(report.scheme, "https://ex.org/v");
//! assert_eq!(report.stats.top_concepts, 1);
//! assert!(turtle.contains("skos:altLabel \"hound\"@en, \"pooch\"@en"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod rdf;
pub mod vocabulary;

// Re-export main types for convenience
pub use rdf::{
    Graph, Literal, NamedNode, Namespace, NamespaceManager, RdfFormat, RdfObject, RdfParser,
    RdfSerializer, Triple,
};

pub use vocabulary::{
    convert, convert_reader, BuildStats, Column, ConversionReport, Row, Vocabulary,
    VocabularyBuilder, VocabularyConfig, VocabularyError, VocabularyResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
