//! Error types for vocabulary conversion

use crate::rdf::{ParseError, RdfError, SerializeError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a CSV table into a vocabulary
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// Configuration rejected before any input was read
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A namespace, scheme or concept IRI is not a valid absolute IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// The language tag applied to literals is malformed
    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),

    /// Input file could not be opened
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// Written output could not be parsed back
    #[error("Output verification failed: {0}")]
    Parse(#[from] ParseError),

    /// Written output parsed, but to a different graph
    #[error("Output verification failed: {0}")]
    VerificationFailed(String),
}

impl From<RdfError> for VocabularyError {
    fn from(err: RdfError) -> Self {
        match err {
            RdfError::InvalidIri(iri) => VocabularyError::InvalidIri(iri),
            RdfError::InvalidLanguageTag(tag) => VocabularyError::InvalidLanguageTag(tag),
        }
    }
}

pub type VocabularyResult<T> = Result<T, VocabularyError>;
