//! End-to-end conversion: CSV in, serialized concept scheme out

use super::builder::{BuildStats, Vocabulary, VocabularyBuilder};
use super::config::VocabularyConfig;
use super::error::{VocabularyError, VocabularyResult};
use super::row::read_rows;
use crate::rdf::{RdfFormat, RdfParser};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input file, when converting from disk
    pub input: Option<PathBuf>,
    /// Output file, when converting to disk
    pub output: Option<PathBuf>,
    /// Serialization written
    pub format: RdfFormat,
    /// ConceptScheme IRI
    pub scheme: String,
    /// Whether the output was parsed back and compared with the graph
    pub verified: bool,
    /// Build counters
    #[serde(flatten)]
    pub stats: BuildStats,
}

/// Convert the CSV file at `input` and write the result to `output`,
/// replacing any existing file.
///
/// The configuration is validated before the input is opened. Nothing is
/// written if reading, building, serializing or verification fails.
pub fn convert(
    input: &Path,
    output: &Path,
    config: &VocabularyConfig,
) -> VocabularyResult<ConversionReport> {
    let builder = VocabularyBuilder::new(config)?;

    info!("Reading vocabulary table from {}", input.display());
    let file = File::open(input).map_err(|source| VocabularyError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let (text, mut report) = convert_with(&builder, BufReader::new(file), config)?;

    std::fs::write(output, text).map_err(|source| VocabularyError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Wrote {} triples to {}", report.stats.triples, output.display());

    report.input = Some(input.to_path_buf());
    report.output = Some(output.to_path_buf());
    Ok(report)
}

/// Convert CSV from any reader into serialized text, without touching disk
pub fn convert_reader<R: Read>(
    reader: R,
    config: &VocabularyConfig,
) -> VocabularyResult<(String, ConversionReport)> {
    let builder = VocabularyBuilder::new(config)?;
    convert_with(&builder, reader, config)
}

fn convert_with<R: Read>(
    builder: &VocabularyBuilder,
    reader: R,
    config: &VocabularyConfig,
) -> VocabularyResult<(String, ConversionReport)> {
    let rows = read_rows(reader)?;
    debug!("Read {} rows", rows.len());

    let vocabulary = builder.build(&rows)?;
    let text = vocabulary.serialize(config.format)?;

    if config.verify_output {
        verify(&vocabulary, &text, config.format)?;
    }

    let report = ConversionReport {
        input: None,
        output: None,
        format: config.format,
        scheme: vocabulary.scheme().as_str().to_string(),
        verified: config.verify_output,
        stats: vocabulary.stats().clone(),
    };
    Ok((text, report))
}

/// Parse `text` back and check it describes exactly the vocabulary's graph
fn verify(vocabulary: &Vocabulary, text: &str, format: RdfFormat) -> VocabularyResult<()> {
    let parsed = RdfParser::parse(text, format)?;
    let graph = vocabulary.graph();

    if let Some(missing) = graph.iter().find(|t| !parsed.contains(t)) {
        return Err(VocabularyError::VerificationFailed(format!(
            "triple missing from output: {missing}"
        )));
    }
    if parsed.len() != graph.len() {
        return Err(VocabularyError::VerificationFailed(format!(
            "output holds {} triples, expected {}",
            parsed.len(),
            graph.len()
        )));
    }

    debug!("Verified {} triples", parsed.len());
    Ok(())
}
