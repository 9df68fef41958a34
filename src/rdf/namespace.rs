//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation. Prefixes
//! keep their registration order so that serialized documents are stable
//! from one run to the next.

use super::vocab::{dcterms, skos};
use indexmap::IndexMap;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager
#[derive(Debug, Clone, Default)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings, in registration order
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create an empty namespace manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager with the prefixes every SKOS document declares,
    /// plus `vocab:` bound to the concept namespace
    pub fn for_vocabulary(namespace: &str) -> Self {
        let mut mgr = Self::new();
        mgr.add_prefix("skos", skos::NAMESPACE);
        mgr.add_prefix("dcterms", dcterms::NAMESPACE);
        mgr.add_prefix("vocab", namespace);
        mgr
    }

    /// Add a prefix, replacing any previous binding
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Compact an IRI using the longest matching namespace.
    ///
    /// Returns `None` when no namespace matches or when the remaining local
    /// part could not be written as a Turtle prefixed name.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .and_then(|(prefix, ns)| {
                let local = &iri[ns.len()..];
                is_safe_local_name(local).then(|| format!("{}:{}", prefix, local))
            })
    }

    /// Get all registered prefixes in registration order
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

/// Conservative subset of the Turtle `PN_LOCAL` production: ASCII
/// alphanumerics and `_` anywhere, `-` and `.` after the first character,
/// and never a trailing `.`.
fn is_safe_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphanumeric() || first == '_') {
        return false;
    }
    if local.ends_with('.') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
