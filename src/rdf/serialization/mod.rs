//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL), written with prefixes and grouped by subject
//! - N-Triples (NT)
//!
//! Both formats can also be parsed back, which is how written documents
//! are verified against the graph they came from.

mod ntriples;
mod turtle;

use super::{Graph, NamespaceManager, RdfError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use ntriples::{NTriplesParserWrapper, NTriplesSerializerWrapper};
pub use turtle::{TurtleParserWrapper, TurtleSerializerWrapper};

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    #[default]
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
}

impl RdfFormat {
    /// Conventional file extension
    pub fn file_extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfFormat::Turtle => write!(f, "turtle"),
            RdfFormat::NTriples => write!(f, "ntriples"),
        }
    }
}

impl FromStr for RdfFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Syntax error reported by the underlying parser
    #[error("Syntax error: {0}")]
    Syntax(#[from] rio_turtle::TurtleError),

    /// A parsed term could not be represented
    #[error("Invalid term: {0}")]
    Term(#[from] RdfError),

    /// Blank nodes and quoted triples are outside the supported model
    #[error("Unsupported term: {0}")]
    Unsupported(String),

    /// Unknown format name
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting error
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// RDF parser
pub struct RdfParser;

impl RdfParser {
    /// Parse RDF data from a string
    pub fn parse(input: &str, format: RdfFormat) -> ParseResult<Graph> {
        match format {
            RdfFormat::Turtle => TurtleParserWrapper::parse(input),
            RdfFormat::NTriples => NTriplesParserWrapper::parse(input),
        }
    }
}

/// RDF serializer
pub struct RdfSerializer;

impl RdfSerializer {
    /// Serialize a graph to a string
    ///
    /// `namespaces` supplies the Turtle prefix declarations; N-Triples has
    /// no prefixes and ignores it.
    pub fn serialize(
        graph: &Graph,
        format: RdfFormat,
        namespaces: &NamespaceManager,
    ) -> SerializeResult<String> {
        match format {
            RdfFormat::Turtle => TurtleSerializerWrapper::serialize(graph, namespaces),
            RdfFormat::NTriples => NTriplesSerializerWrapper::serialize(graph),
        }
    }
}
