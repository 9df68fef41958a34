//! Conversion configuration
//!
//! Holds everything a run needs besides the input rows: where concept IRIs
//! live, which scheme they belong to, the language of their literals and
//! how the result is written.

use super::error::{VocabularyError, VocabularyResult};
use crate::rdf::{Literal, RdfFormat};

/// Language tag applied to literals when none is configured
pub const DEFAULT_LANG: &str = "en";

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyConfig {
    /// Prefix every concept IRI is minted under
    pub namespace: String,
    /// Explicit ConceptScheme IRI (derived from the namespace when `None`)
    pub scheme_uri: Option<String>,
    /// Human-readable scheme label
    pub scheme_label: Option<String>,
    /// Language tag for labels, definitions and examples; empty for none
    pub lang: String,
    /// Output serialization
    pub format: RdfFormat,
    /// Emit exactMatch/closeMatch values that are absolute IRIs as IRIs
    pub match_iris: bool,
    /// Parse the serialized output back and compare it with the graph
    pub verify_output: bool,
}

impl VocabularyConfig {
    /// Create a configuration with defaults for everything but the namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            scheme_uri: None,
            scheme_label: None,
            lang: DEFAULT_LANG.to_string(),
            format: RdfFormat::Turtle,
            match_iris: false,
            verify_output: true,
        }
    }

    pub fn with_scheme_uri(mut self, scheme_uri: impl Into<String>) -> Self {
        self.scheme_uri = Some(scheme_uri.into());
        self
    }

    pub fn with_scheme_label(mut self, scheme_label: impl Into<String>) -> Self {
        self.scheme_label = Some(scheme_label.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_match_iris(mut self, match_iris: bool) -> Self {
        self.match_iris = match_iris;
        self
    }

    pub fn with_verify_output(mut self, verify_output: bool) -> Self {
        self.verify_output = verify_output;
        self
    }

    /// Namespace with a `#` appended unless it already ends in `#` or `/`
    pub fn normalized_namespace(&self) -> String {
        normalize_namespace(&self.namespace)
    }

    /// The explicit scheme IRI, or one derived from the namespace
    pub fn resolved_scheme_uri(&self) -> String {
        match self.scheme_uri.as_deref().map(str::trim) {
            Some(uri) if !uri.is_empty() => uri.to_string(),
            _ => derive_scheme_uri(&self.normalized_namespace()),
        }
    }

    /// Scheme label, if one was given and is not blank
    pub fn scheme_label(&self) -> Option<&str> {
        self.scheme_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// Language tag for literals; `None` when configured as empty
    pub fn language(&self) -> Option<&str> {
        let lang = self.lang.trim();
        (!lang.is_empty()).then_some(lang)
    }

    /// Reject a configuration that could not produce a valid document
    pub fn validate(&self) -> VocabularyResult<()> {
        if self.namespace.trim().is_empty() {
            return Err(VocabularyError::InvalidConfig(
                "namespace must not be empty".to_string(),
            ));
        }

        let namespace = self.normalized_namespace();
        oxiri::Iri::parse(namespace.as_str())
            .map_err(|e| VocabularyError::InvalidIri(format!("namespace {namespace} ({e})")))?;

        let scheme = self.resolved_scheme_uri();
        oxiri::Iri::parse(scheme.as_str())
            .map_err(|e| VocabularyError::InvalidIri(format!("scheme {scheme} ({e})")))?;

        if let Some(lang) = self.language() {
            Literal::new_language_tagged_literal("", lang)?;
        }

        Ok(())
    }
}

/// Append `#` to a namespace unless it already ends in `#` or `/`
pub fn normalize_namespace(namespace: &str) -> String {
    let namespace = namespace.trim();
    if namespace.ends_with('#') || namespace.ends_with('/') {
        namespace.to_string()
    } else {
        format!("{namespace}#")
    }
}

/// Strip trailing `#` and `/` separators from a namespace
pub fn derive_scheme_uri(namespace: &str) -> String {
    namespace.trim().trim_end_matches(['#', '/']).to_string()
}
