//! In-memory RDF graph
//!
//! A vocabulary run builds one graph, writes it out and drops it, so the
//! graph is a plain owned set of triples. Insertion order is kept so that
//! serializers can emit subjects in the order they were first described.

use super::types::{NamedNode, RdfObject, Triple};
use indexmap::IndexSet;

/// Insertion-ordered, de-duplicated set of triples
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple. Returns `false` if the graph already held it.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Insert a triple built from its parts
    pub fn add(
        &mut self,
        subject: &NamedNode,
        predicate: &NamedNode,
        object: impl Into<RdfObject>,
    ) -> bool {
        self.insert(Triple::new(subject.clone(), predicate.clone(), object))
    }

    /// Check if a triple exists in the graph
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get triples with a specific subject
    pub fn triples_with_subject<'a>(
        &'a self,
        subject: &'a NamedNode,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| &t.subject == subject)
    }

    /// Objects of every `subject predicate ?o` triple
    pub fn objects<'a>(
        &'a self,
        subject: &'a NamedNode,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a RdfObject> + 'a {
        self.triples_with_subject(subject)
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of every `?s predicate object` triple
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a RdfObject,
    ) -> impl Iterator<Item = &'a NamedNode> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate.as_str() == predicate && &t.object == object)
            .map(|t| &t.subject)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}
