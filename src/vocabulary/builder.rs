//! Concept scheme construction
//!
//! A [`VocabularyBuilder`] turns rows into a SKOS graph in three passes:
//!
//! 1. **Concepts**: every row with an ID becomes a `skos:Concept` in the
//!    scheme, carrying its labels, notes and matches.
//! 2. **Links**: `broader` references to known concepts become
//!    `skos:broader` / `skos:narrower` pairs. Unknown and self references
//!    are dropped.
//! 3. **Top concepts**: concepts left without a broader link are tied to
//!    the scheme with `skos:hasTopConcept` / `skos:topConceptOf`.

use super::config::VocabularyConfig;
use super::error::VocabularyResult;
use super::row::{split_alt_labels, split_broader, Column, Row};
use crate::rdf::vocab::{dcterms, rdf, skos};
use crate::rdf::{
    Graph, Literal, NamedNode, NamespaceManager, RdfFormat, RdfObject, RdfResult, RdfSerializer,
    SerializeResult,
};
use indexmap::IndexMap;
use percent_encoding::{percent_encode_byte, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Counters collected while building a vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Rows read from the input
    pub rows: usize,
    /// Rows without an ID
    pub skipped_rows: usize,
    /// Distinct concepts declared
    pub concepts: usize,
    /// Rows repeating an ID seen earlier
    pub duplicate_ids: usize,
    /// Distinct broader links (each also emitted as a narrower link)
    pub broader_links: usize,
    /// Broader references naming no known concept, or the concept itself
    pub unresolved_references: usize,
    /// Concepts without a broader link
    pub top_concepts: usize,
    /// Triples in the finished graph
    pub triples: usize,
}

/// Predicate and class IRIs, validated once per builder
#[derive(Debug, Clone)]
struct Terms {
    rdf_type: NamedNode,
    concept: NamedNode,
    concept_scheme: NamedNode,
    in_scheme: NamedNode,
    has_top_concept: NamedNode,
    top_concept_of: NamedNode,
    pref_label: NamedNode,
    alt_label: NamedNode,
    definition: NamedNode,
    example: NamedNode,
    exact_match: NamedNode,
    close_match: NamedNode,
    broader: NamedNode,
    narrower: NamedNode,
    title: NamedNode,
}

impl Terms {
    fn new() -> RdfResult<Self> {
        Ok(Self {
            rdf_type: NamedNode::new(rdf::TYPE)?,
            concept: NamedNode::new(skos::CONCEPT)?,
            concept_scheme: NamedNode::new(skos::CONCEPT_SCHEME)?,
            in_scheme: NamedNode::new(skos::IN_SCHEME)?,
            has_top_concept: NamedNode::new(skos::HAS_TOP_CONCEPT)?,
            top_concept_of: NamedNode::new(skos::TOP_CONCEPT_OF)?,
            pref_label: NamedNode::new(skos::PREF_LABEL)?,
            alt_label: NamedNode::new(skos::ALT_LABEL)?,
            definition: NamedNode::new(skos::DEFINITION)?,
            example: NamedNode::new(skos::EXAMPLE)?,
            exact_match: NamedNode::new(skos::EXACT_MATCH)?,
            close_match: NamedNode::new(skos::CLOSE_MATCH)?,
            broader: NamedNode::new(skos::BROADER)?,
            narrower: NamedNode::new(skos::NARROWER)?,
            title: NamedNode::new(dcterms::TITLE)?,
        })
    }
}

/// Builds a SKOS concept scheme from vocabulary rows
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    namespace: String,
    scheme: NamedNode,
    scheme_label: Option<String>,
    lang: Option<String>,
    match_iris: bool,
    terms: Terms,
}

impl VocabularyBuilder {
    /// Create a builder, validating the configuration first
    pub fn new(config: &VocabularyConfig) -> VocabularyResult<Self> {
        config.validate()?;

        Ok(Self {
            namespace: config.normalized_namespace(),
            scheme: NamedNode::new(config.resolved_scheme_uri())?,
            scheme_label: config.scheme_label().map(str::to_string),
            lang: config.language().map(str::to_string),
            match_iris: config.match_iris,
            terms: Terms::new()?,
        })
    }

    /// Scheme every concept belongs to
    pub fn scheme(&self) -> &NamedNode {
        &self.scheme
    }

    /// Run all three passes over `rows`
    pub fn build(&self, rows: &[Row]) -> VocabularyResult<Vocabulary> {
        info!(
            "Building vocabulary from {} rows into scheme {}",
            rows.len(),
            self.scheme.as_str()
        );

        let mut graph = Graph::new();
        let mut stats = BuildStats {
            rows: rows.len(),
            ..BuildStats::default()
        };

        self.describe_scheme(&mut graph)?;
        let concepts = self.declare_concepts(&mut graph, rows, &mut stats)?;
        let linked = self.link_concepts(&mut graph, rows, &concepts, &mut stats);
        let top_concepts = self.mark_top_concepts(&mut graph, &concepts, &linked);

        stats.concepts = concepts.len();
        stats.top_concepts = top_concepts.len();
        stats.triples = graph.len();

        info!(
            "Built {} concepts ({} top concepts, {} broader links) as {} triples",
            stats.concepts, stats.top_concepts, stats.broader_links, stats.triples
        );

        Ok(Vocabulary {
            scheme: self.scheme.clone(),
            namespaces: NamespaceManager::for_vocabulary(&self.namespace),
            graph,
            concepts,
            top_concepts,
            stats,
        })
    }

    fn describe_scheme(&self, graph: &mut Graph) -> VocabularyResult<()> {
        let t = &self.terms;
        graph.add(&self.scheme, &t.rdf_type, t.concept_scheme.clone());

        if let Some(label) = &self.scheme_label {
            graph.add(&self.scheme, &t.title, self.literal(label)?);
            graph.add(&self.scheme, &t.pref_label, self.literal(label)?);
        }
        Ok(())
    }

    /// Pass 1: declare concepts and attach their scalar fields
    fn declare_concepts(
        &self,
        graph: &mut Graph,
        rows: &[Row],
        stats: &mut BuildStats,
    ) -> VocabularyResult<IndexMap<String, NamedNode>> {
        let mut concepts: IndexMap<String, NamedNode> = IndexMap::new();

        for row in rows {
            let Some(id) = row.id() else {
                debug!("Skipping line {}: no ID", row.line);
                stats.skipped_rows += 1;
                continue;
            };

            let concept = match concepts.get(id) {
                Some(existing) => {
                    warn!("Line {} repeats concept ID {}; merging attributes", row.line, id);
                    stats.duplicate_ids += 1;
                    existing.clone()
                }
                None => {
                    let iri = mint_concept_iri(&self.namespace, id)?;
                    concepts.insert(id.to_string(), iri.clone());
                    iri
                }
            };

            self.describe_concept(graph, &concept, row)?;
        }

        Ok(concepts)
    }

    fn describe_concept(
        &self,
        graph: &mut Graph,
        concept: &NamedNode,
        row: &Row,
    ) -> VocabularyResult<()> {
        let t = &self.terms;
        graph.add(concept, &t.rdf_type, t.concept.clone());
        graph.add(concept, &t.in_scheme, self.scheme.clone());

        if let Some(label) = row.get(Column::PrefLabel) {
            graph.add(concept, &t.pref_label, self.literal(label)?);
        }
        if let Some(labels) = row.get(Column::AltLabel) {
            for label in split_alt_labels(labels) {
                graph.add(concept, &t.alt_label, self.literal(label)?);
            }
        }
        if let Some(definition) = row.get(Column::Definition) {
            graph.add(concept, &t.definition, self.literal(definition)?);
        }
        if let Some(example) = row.get(Column::Example) {
            graph.add(concept, &t.example, self.literal(example)?);
        }
        if let Some(target) = row.get(Column::ExactMatch) {
            graph.add(concept, &t.exact_match, self.match_object(target));
        }
        if let Some(target) = row.get(Column::CloseMatch) {
            graph.add(concept, &t.close_match, self.match_object(target));
        }
        Ok(())
    }

    /// Pass 2: broader/narrower pairs. Returns the IDs that gained a parent.
    fn link_concepts<'r>(
        &self,
        graph: &mut Graph,
        rows: &'r [Row],
        concepts: &IndexMap<String, NamedNode>,
        stats: &mut BuildStats,
    ) -> HashSet<&'r str> {
        let t = &self.terms;
        let mut linked = HashSet::new();

        for row in rows {
            let (Some(id), Some(parents)) = (row.id(), row.get(Column::Broader)) else {
                continue;
            };
            let Some(child) = concepts.get(id) else {
                continue;
            };

            for parent_id in split_broader(parents) {
                if parent_id == id {
                    debug!("Line {}: ignoring self-reference in broader of {}", row.line, id);
                    stats.unresolved_references += 1;
                    continue;
                }
                let Some(parent) = concepts.get(parent_id) else {
                    debug!("Line {}: unknown broader concept {} for {}", row.line, parent_id, id);
                    stats.unresolved_references += 1;
                    continue;
                };

                if graph.add(child, &t.broader, parent.clone()) {
                    stats.broader_links += 1;
                }
                graph.add(parent, &t.narrower, child.clone());
                linked.insert(id);
            }
        }

        linked
    }

    /// Pass 3: concepts without a valid broader link become top concepts
    fn mark_top_concepts(
        &self,
        graph: &mut Graph,
        concepts: &IndexMap<String, NamedNode>,
        linked: &HashSet<&str>,
    ) -> Vec<String> {
        let t = &self.terms;
        let mut top = Vec::new();

        for (id, concept) in concepts {
            if linked.contains(id.as_str()) {
                continue;
            }
            graph.add(&self.scheme, &t.has_top_concept, concept.clone());
            graph.add(concept, &t.top_concept_of, self.scheme.clone());
            top.push(id.clone());
        }

        top
    }

    fn literal(&self, value: &str) -> VocabularyResult<Literal> {
        Ok(Literal::new_with_optional_language(value, self.lang.as_deref())?)
    }

    fn match_object(&self, value: &str) -> RdfObject {
        if self.match_iris {
            if let Ok(iri) = NamedNode::new(value) {
                return iri.into();
            }
        }
        Literal::new_simple_literal(value).into()
    }
}

/// ASCII bytes escaped in concept IDs: everything except the IRI
/// `unreserved` and `sub-delims` characters plus `:`, `@`, `/` and `?`.
/// `#` and `%` are escaped so the ID stays a single opaque local part.
const ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// RFC 3987 `ucschar`: non-ASCII code points allowed unescaped in an IRI path
/// or fragment
fn is_ucschar(c: char) -> bool {
    let cp = u32::from(c);
    match cp {
        0xA0..=0xD7FF | 0xF900..=0xFDCF | 0xFDF0..=0xFFEF => true,
        0xE0000..=0xE0FFF => false,
        0x10000..=0xEFFFD => (cp & 0xFFFF) <= 0xFFFD,
        _ => false,
    }
}

/// Mint a concept IRI by appending `id` to `namespace`.
///
/// Every character that may not appear unescaped in an IRI path or
/// fragment is percent-encoded as UTF-8, so any non-empty ID yields a
/// valid IRI once the namespace itself is valid. Non-ASCII letters are
/// kept as they are.
pub fn mint_concept_iri(namespace: &str, id: &str) -> RdfResult<NamedNode> {
    let mut iri = String::with_capacity(namespace.len() + id.len());
    iri.push_str(namespace);

    let mut buf = [0u8; 4];
    for c in id.chars() {
        let encoded: &str = c.encode_utf8(&mut buf);
        if c.is_ascii() {
            iri.extend(utf8_percent_encode(encoded, ID_ENCODE_SET));
        } else if is_ucschar(c) {
            iri.push(c);
        } else {
            for byte in encoded.bytes() {
                iri.push_str(percent_encode_byte(byte));
            }
        }
    }

    NamedNode::new(iri)
}

/// A finished concept scheme
#[derive(Debug, Clone)]
pub struct Vocabulary {
    scheme: NamedNode,
    namespaces: NamespaceManager,
    graph: Graph,
    concepts: IndexMap<String, NamedNode>,
    top_concepts: Vec<String>,
    stats: BuildStats,
}

impl Vocabulary {
    /// The ConceptScheme IRI
    pub fn scheme(&self) -> &NamedNode {
        &self.scheme
    }

    /// Every triple of the scheme
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Prefixes used for Turtle output
    pub fn namespaces(&self) -> &NamespaceManager {
        &self.namespaces
    }

    /// Counters from the build
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Concept IDs and IRIs, in first-seen order
    pub fn concepts(&self) -> impl Iterator<Item = (&str, &NamedNode)> {
        self.concepts.iter().map(|(id, iri)| (id.as_str(), iri))
    }

    /// IRI of the concept with this ID
    pub fn concept_iri(&self, id: &str) -> Option<&NamedNode> {
        self.concepts.get(id)
    }

    /// IDs of the top concepts, in first-seen order
    pub fn top_concepts(&self) -> &[String] {
        &self.top_concepts
    }

    /// Serialize the scheme
    pub fn serialize(&self, format: RdfFormat) -> SerializeResult<String> {
        RdfSerializer::serialize(&self.graph, format, &self.namespaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Triple;
    use crate::vocabulary::error::VocabularyError;

    const NS: &str = "https://ex.org/v#";

    fn node(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn concept(id: &str) -> NamedNode {
        node(&format!("{NS}{id}"))
    }

    fn build(rows: Vec<Row>) -> Vocabulary {
        let config = VocabularyConfig::new(NS);
        VocabularyBuilder::new(&config).unwrap().build(&rows).unwrap()
    }

    fn has(vocab: &Vocabulary, s: &NamedNode, p: &str, o: impl Into<RdfObject>) -> bool {
        vocab.graph().contains(&Triple::new(s.clone(), node(p), o))
    }

    fn en(value: &str) -> Literal {
        Literal::new_language_tagged_literal(value, "en").unwrap()
    }

    #[test]
    fn test_animal_dog_scenario() {
        let vocab = build(vec![
            Row::new(1, [("ID", "A"), ("prefLabel", "Animal")]),
            Row::new(2, [("ID", "B"), ("prefLabel", "Dog"), ("broader", "A")]),
        ]);

        let scheme = node("https://ex.org/v");
        let (a, b) = (concept("A"), concept("B"));

        assert_eq!(vocab.scheme(), &scheme);
        assert!(has(&vocab, &scheme, rdf::TYPE, node(skos::CONCEPT_SCHEME)));

        assert!(has(&vocab, &a, rdf::TYPE, node(skos::CONCEPT)));
        assert!(has(&vocab, &a, skos::IN_SCHEME, scheme.clone()));
        assert!(has(&vocab, &a, skos::PREF_LABEL, en("Animal")));
        assert!(has(&vocab, &b, skos::PREF_LABEL, en("Dog")));

        assert!(has(&vocab, &b, skos::BROADER, a.clone()));
        assert!(has(&vocab, &a, skos::NARROWER, b.clone()));

        assert!(has(&vocab, &scheme, skos::HAS_TOP_CONCEPT, a.clone()));
        assert!(has(&vocab, &a, skos::TOP_CONCEPT_OF, scheme.clone()));
        assert!(!has(&vocab, &scheme, skos::HAS_TOP_CONCEPT, b.clone()));
        assert!(!has(&vocab, &b, skos::TOP_CONCEPT_OF, scheme));

        assert_eq!(vocab.top_concepts(), ["A".to_string()]);
        assert_eq!(vocab.stats().broader_links, 1);
        assert_eq!(vocab.stats().concepts, 2);
    }

    #[test]
    fn test_rows_without_id_emit_nothing() {
        let with_blank = build(vec![
            Row::new(1, [("ID", "A"), ("prefLabel", "Animal")]),
            Row::new(2, [("ID", ""), ("prefLabel", "Orphan")]),
            Row::new(3, [("prefLabel", "No ID column")]),
        ]);
        let without = build(vec![Row::new(1, [("ID", "A"), ("prefLabel", "Animal")])]);

        assert_eq!(with_blank.graph().len(), without.graph().len());
        assert_eq!(with_blank.stats().skipped_rows, 2);
        assert_eq!(with_blank.concepts().count(), 1);
    }

    #[test]
    fn test_alt_labels_split_on_commas() {
        let vocab = build(vec![Row::new(1, [("ID", "A"), ("altLabel", "x, y, z")])]);
        let a = concept("A");

        let labels: Vec<&RdfObject> = vocab.graph().objects(&a, skos::ALT_LABEL).collect();
        assert_eq!(labels.len(), 3);
        for value in ["x", "y", "z"] {
            assert!(has(&vocab, &a, skos::ALT_LABEL, en(value)));
        }
    }

    #[test]
    fn test_definition_example_and_matches() {
        let vocab = build(vec![Row::new(
            1,
            [
                ("ID", "A"),
                ("definition", "A living thing"),
                ("example", "A cat"),
                ("exactMatch", "http://other.org/animal"),
                ("closeMatch", "wd:Q729"),
            ],
        )]);
        let a = concept("A");

        assert!(has(&vocab, &a, skos::DEFINITION, en("A living thing")));
        assert!(has(&vocab, &a, skos::EXAMPLE, en("A cat")));
        assert!(has(
            &vocab,
            &a,
            skos::EXACT_MATCH,
            Literal::new_simple_literal("http://other.org/animal")
        ));
        assert!(has(
            &vocab,
            &a,
            skos::CLOSE_MATCH,
            Literal::new_simple_literal("wd:Q729")
        ));
    }

    #[test]
    fn test_match_iris_option() {
        let config = VocabularyConfig::new(NS).with_match_iris(true);
        let rows = vec![Row::new(
            1,
            [
                ("ID", "A"),
                ("exactMatch", "http://other.org/animal"),
                ("closeMatch", "not an iri"),
            ],
        )];
        let vocab = VocabularyBuilder::new(&config).unwrap().build(&rows).unwrap();
        let a = concept("A");

        assert!(has(&vocab, &a, skos::EXACT_MATCH, node("http://other.org/animal")));
        assert!(has(
            &vocab,
            &a,
            skos::CLOSE_MATCH,
            Literal::new_simple_literal("not an iri")
        ));
    }

    #[test]
    fn test_broader_separators_and_unknown_targets() {
        let vocab = build(vec![
            Row::new(1, [("ID", "A")]),
            Row::new(2, [("ID", "B")]),
            Row::new(3, [("ID", "C"), ("broader", "A | B; Missing")]),
        ]);
        let (a, b, c) = (concept("A"), concept("B"), concept("C"));

        assert!(has(&vocab, &c, skos::BROADER, a.clone()));
        assert!(has(&vocab, &c, skos::BROADER, b.clone()));
        assert!(has(&vocab, &a, skos::NARROWER, c.clone()));
        assert!(has(&vocab, &b, skos::NARROWER, c.clone()));
        assert!(!has(&vocab, &c, skos::BROADER, concept("Missing")));

        assert_eq!(vocab.stats().unresolved_references, 1);
        assert_eq!(vocab.top_concepts(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_unknown_or_self_broader_keeps_top_concept() {
        let vocab = build(vec![
            Row::new(1, [("ID", "A"), ("broader", "Nowhere")]),
            Row::new(2, [("ID", "B"), ("broader", "B")]),
        ]);
        let scheme = node("https://ex.org/v");

        assert_eq!(vocab.top_concepts(), ["A".to_string(), "B".to_string()]);
        assert!(!has(&vocab, &concept("B"), skos::BROADER, concept("B")));

        let tops: Vec<&NamedNode> = vocab
            .graph()
            .objects(&scheme, skos::HAS_TOP_CONCEPT)
            .filter_map(RdfObject::as_named_node)
            .collect();
        assert_eq!(tops, vec![&concept("A"), &concept("B")]);
        assert_eq!(vocab.stats().unresolved_references, 2);
    }

    #[test]
    fn test_forward_references_resolve() {
        let vocab = build(vec![
            Row::new(1, [("ID", "B"), ("broader", "A")]),
            Row::new(2, [("ID", "A")]),
        ]);

        assert!(has(&vocab, &concept("B"), skos::BROADER, concept("A")));
        assert_eq!(vocab.top_concepts(), ["A".to_string()]);
    }

    #[test]
    fn test_repeated_ids_merge_attributes() {
        let vocab = build(vec![
            Row::new(1, [("ID", "A"), ("prefLabel", "Animal")]),
            Row::new(2, [("ID", "A"), ("altLabel", "Beast")]),
        ]);
        let a = concept("A");

        assert_eq!(vocab.concepts().count(), 1);
        assert_eq!(vocab.stats().duplicate_ids, 1);
        assert!(has(&vocab, &a, skos::PREF_LABEL, en("Animal")));
        assert!(has(&vocab, &a, skos::ALT_LABEL, en("Beast")));
        assert_eq!(vocab.graph().objects(&a, rdf::TYPE).count(), 1);
    }

    #[test]
    fn test_scheme_label_and_language() {
        let config = VocabularyConfig::new("https://ex.org/v/")
            .with_scheme_label("Tiere")
            .with_lang("de");
        let rows = vec![Row::new(1, [("ID", "A"), ("prefLabel", "Tier")])];
        let vocab = VocabularyBuilder::new(&config).unwrap().build(&rows).unwrap();

        let scheme = node("https://ex.org/v");
        let de = |v: &str| Literal::new_language_tagged_literal(v, "de").unwrap();
        assert!(has(&vocab, &scheme, dcterms::TITLE, de("Tiere")));
        assert!(has(&vocab, &scheme, skos::PREF_LABEL, de("Tiere")));
        assert!(has(&vocab, &node("https://ex.org/v/A"), skos::PREF_LABEL, de("Tier")));
    }

    #[test]
    fn test_untagged_literals_when_lang_is_empty() {
        let config = VocabularyConfig::new(NS).with_lang("");
        let rows = vec![Row::new(1, [("ID", "A"), ("prefLabel", "Animal")])];
        let vocab = VocabularyBuilder::new(&config).unwrap().build(&rows).unwrap();

        assert!(has(
            &vocab,
            &concept("A"),
            skos::PREF_LABEL,
            Literal::new_simple_literal("Animal")
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = VocabularyConfig::new("");
        assert!(matches!(
            VocabularyBuilder::new(&config),
            Err(VocabularyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mint_concept_iri() {
        assert_eq!(mint_concept_iri(NS, "A").unwrap().as_str(), "https://ex.org/v#A");
        assert_eq!(
            mint_concept_iri(NS, "big dog").unwrap().as_str(),
            "https://ex.org/v#big%20dog"
        );
        assert_eq!(
            mint_concept_iri(NS, "a#b%c").unwrap().as_str(),
            "https://ex.org/v#a%23b%25c"
        );
        assert_eq!(
            mint_concept_iri(NS, "Größe").unwrap().as_str(),
            "https://ex.org/v#Größe"
        );
        assert_eq!(
            mint_concept_iri(NS, "item[1]").unwrap().as_str(),
            "https://ex.org/v#item%5B1%5D"
        );
        assert_eq!(
            mint_concept_iri(NS, "A\u{FFFD}").unwrap().as_str(),
            "https://ex.org/v#A%EF%BF%BD"
        );
        assert_eq!(
            mint_concept_iri(NS, "A\u{E000}").unwrap().as_str(),
            "https://ex.org/v#A%EE%80%80"
        );
        assert_eq!(
            mint_concept_iri(NS, "x\u{FDD0}").unwrap().as_str(),
            "https://ex.org/v#x%EF%B7%90"
        );
        assert_eq!(
            mint_concept_iri(NS, "a:b@c/d?e=f&g").unwrap().as_str(),
            "https://ex.org/v#a:b@c/d?e=f&g"
        );
    }

    #[test]
    fn test_ids_with_reserved_characters_still_link() {
        let vocab = build(vec![
            Row::new(1, [("ID", "item[1]"), ("prefLabel", "One")]),
            Row::new(2, [("ID", "A\u{FFFD}"), ("broader", "item[1]")]),
            Row::new(3, [("ID", "B"), ("broader", "A\u{FFFD}")]),
        ]);
        let item = concept("item%5B1%5D");
        let odd = concept("A%EF%BF%BD");

        assert_eq!(vocab.concepts().count(), 3);
        assert_eq!(vocab.concept_iri("item[1]"), Some(&item));
        assert!(has(&vocab, &odd, skos::BROADER, item.clone()));
        assert!(has(&vocab, &concept("B"), skos::BROADER, odd.clone()));
        assert_eq!(vocab.top_concepts(), ["item[1]".to_string()]);
    }

    #[test]
    fn test_serialize_turtle() {
        let vocab = build(vec![
            Row::new(1, [("ID", "A"), ("prefLabel", "Animal")]),
            Row::new(2, [("ID", "B"), ("prefLabel", "Dog"), ("broader", "A")]),
        ]);
        let turtle = vocab.serialize(RdfFormat::Turtle).unwrap();

        assert!(turtle.contains("@prefix vocab: <https://ex.org/v#> ."));
        assert!(turtle.contains("<https://ex.org/v> a skos:ConceptScheme ;"));
        assert!(turtle.contains("vocab:B a skos:Concept ;"));
        assert!(turtle.contains("skos:broader vocab:A"));
        assert!(turtle.contains("skos:narrower vocab:B"));
    }
}
