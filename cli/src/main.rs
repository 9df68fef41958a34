//! csv2skos - convert a CSV vocabulary table into a SKOS concept scheme
//!
//! Uses the skos-vocab library; one invocation converts one file.

use anyhow::Context;
use clap::Parser;
use comfy_table::{ContentArrangement, Table};
use skos_vocab::{convert, ConversionReport, RdfFormat, VocabularyConfig};
use std::path::{Path, PathBuf};
use tracing::{warn, Level};

#[derive(Parser, Debug)]
#[command(name = "csv2skos", version, about = "Convert a CSV vocabulary into SKOS Turtle")]
struct Cli {
    /// Input CSV file
    #[arg(long)]
    input: PathBuf,

    /// Output file (overwritten if it exists)
    #[arg(long)]
    output: PathBuf,

    /// Namespace for concept URIs (e.g. https://example.org/vocab#)
    #[arg(long)]
    namespace: String,

    /// URI for the ConceptScheme (default: namespace without trailing #/)
    #[arg(long)]
    scheme_uri: Option<String>,

    /// Human label for the ConceptScheme
    #[arg(long)]
    scheme_label: Option<String>,

    /// Language tag for labels and notes; empty for untagged literals
    #[arg(long, default_value = skos_vocab::vocabulary::DEFAULT_LANG, env = "CSV2SKOS_LANG")]
    lang: String,

    /// Output serialization
    #[arg(long, default_value = "turtle")]
    format: OutputFormat,

    /// Emit exactMatch/closeMatch values that are absolute IRIs as IRIs
    #[arg(long)]
    match_iris: bool,

    /// Skip parsing the output back before writing it
    #[arg(long)]
    no_verify: bool,

    /// How to print the conversion summary
    #[arg(long, default_value = "text")]
    summary: SummaryFormat,

    /// Log debug details (skipped rows, unresolved references)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Turtle,
    Ntriples,
}

impl From<OutputFormat> for RdfFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Turtle => RdfFormat::Turtle,
            OutputFormat::Ntriples => RdfFormat::NTriples,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum SummaryFormat {
    None,
    Text,
    Json,
    Table,
}

impl Cli {
    fn config(&self) -> VocabularyConfig {
        let mut config = VocabularyConfig::new(self.namespace.clone())
            .with_lang(self.lang.clone())
            .with_format(self.format.into())
            .with_match_iris(self.match_iris)
            .with_verify_output(!self.no_verify);
        if let Some(uri) = &self.scheme_uri {
            config = config.with_scheme_uri(uri.clone());
        }
        if let Some(label) = &self.scheme_label {
            config = config.with_scheme_label(label.clone());
        }
        config
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let format = RdfFormat::from(cli.format);
    if !extension_matches(&cli.output, format) {
        warn!(
            "{} does not end in .{}; writing {} anyway",
            cli.output.display(),
            format.file_extension(),
            format
        );
    }

    let report = convert(&cli.input, &cli.output, &cli.config()).with_context(|| {
        format!(
            "converting {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    print_summary(&report, cli.summary)
}

/// Whether `path` carries the conventional extension for `format`.
/// Paths without an extension are accepted.
fn extension_matches(path: &Path, format: RdfFormat) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(true, |ext| ext.eq_ignore_ascii_case(format.file_extension()))
}

fn print_summary(report: &ConversionReport, format: SummaryFormat) -> anyhow::Result<()> {
    let stats = &report.stats;
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Text => {
            println!(
                "{} concepts ({} top, {} broader links, {} unresolved references) -> {} triples in {}",
                stats.concepts,
                stats.top_concepts,
                stats.broader_links,
                stats.unresolved_references,
                stats.triples,
                report
                    .output
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            );
        }
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        SummaryFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec!["Scheme".to_string(), report.scheme.clone()]);
            table.add_row(vec!["Format".to_string(), report.format.to_string()]);
            table.add_row(vec!["Rows".to_string(), stats.rows.to_string()]);
            table.add_row(vec!["Skipped rows".to_string(), stats.skipped_rows.to_string()]);
            table.add_row(vec!["Concepts".to_string(), stats.concepts.to_string()]);
            table.add_row(vec!["Duplicate IDs".to_string(), stats.duplicate_ids.to_string()]);
            table.add_row(vec!["Top concepts".to_string(), stats.top_concepts.to_string()]);
            table.add_row(vec!["Broader links".to_string(), stats.broader_links.to_string()]);
            table.add_row(vec![
                "Unresolved references".to_string(),
                stats.unresolved_references.to_string(),
            ]);
            table.add_row(vec!["Triples".to_string(), stats.triples.to_string()]);
            table.add_row(vec!["Verified".to_string(), report.verified.to_string()]);
            println!("{}", table);
        }
    }
    Ok(())
}
