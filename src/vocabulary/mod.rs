//! CSV → SKOS vocabulary conversion
//!
//! Reads a vocabulary table (one concept per row) and builds a SKOS
//! concept scheme from it.
//!
//! Recognized columns, each also accepted in a second casing:
//!
//! | Column       | Emitted as                                   |
//! |--------------|----------------------------------------------|
//! | `ID`         | concept IRI (namespace + ID)                 |
//! | `prefLabel`  | `skos:prefLabel`                             |
//! | `altLabel`   | `skos:altLabel`, one per comma-separated value |
//! | `definition` | `skos:definition`                            |
//! | `example`    | `skos:example`                               |
//! | `exactMatch` | `skos:exactMatch`                            |
//! | `closeMatch` | `skos:closeMatch`                            |
//! | `broader`    | `skos:broader` + `skos:narrower`, IDs separated by `\|` or `;` |
//!
//! # Example
//!
//! ```rust
//! use skos_vocab::vocabulary::{convert_reader, VocabularyConfig};
//!
//! let csv = "ID,prefLabel,broader\nA,Animal,\nB,Dog,A\n";
//! let config = VocabularyConfig::new("https://ex.org/v#");
//! let (turtle, report) = convert_reader(csv.as_bytes(), &config).unwrap();
//!
//! assert_eq!(report.stats.concepts, 2);
//! assert!(turtle.contains("vocab:B"));
//! ```

mod builder;
mod config;
mod convert;
mod error;
mod row;

pub use builder::{mint_concept_iri, BuildStats, Vocabulary, VocabularyBuilder};
pub use config::{derive_scheme_uri, normalize_namespace, VocabularyConfig, DEFAULT_LANG};
pub use convert::{convert, convert_reader, ConversionReport};
pub use error::{VocabularyError, VocabularyResult};
pub use row::{read_rows, split_alt_labels, split_broader, Column, Row};
