//! Turtle format implementation

use super::{ParseError, ParseResult, SerializeResult};
use crate::rdf::vocab::rdf;
use crate::rdf::{Graph, Literal, NamedNode, NamespaceManager, RdfObject, Triple};
use indexmap::IndexMap;
use rio_api::model::{Literal as RioLiteral, Subject as RioSubject, Term as RioTerm};
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser;
use std::fmt::Write;
use std::io::Cursor;

const INDENT: &str = "    ";

/// Turtle parser
pub struct TurtleParserWrapper;

impl TurtleParserWrapper {
    /// Parse a Turtle document into a graph
    pub fn parse(input: &str) -> ParseResult<Graph> {
        let mut parser = TurtleParser::new(Cursor::new(input), None);
        let mut graph = Graph::new();

        parser.parse_all(&mut |t| -> ParseResult<()> {
            graph.insert(convert_triple(t)?);
            Ok(())
        })?;

        Ok(graph)
    }
}

/// Turtle serializer
///
/// Writes one `@prefix` line per registered namespace, then one block per
/// subject. Predicates sharing a subject are joined with `;` and objects
/// sharing a predicate with `,`.
pub struct TurtleSerializerWrapper;

impl TurtleSerializerWrapper {
    /// Serialize a graph to a Turtle string
    pub fn serialize(graph: &Graph, namespaces: &NamespaceManager) -> SerializeResult<String> {
        let mut out = String::new();

        for ns in namespaces.prefixes() {
            writeln!(out, "@prefix {}: <{}> .", ns.prefix, ns.iri)?;
        }

        let mut blocks: IndexMap<&NamedNode, IndexMap<&NamedNode, Vec<&RdfObject>>> =
            IndexMap::new();
        for triple in graph {
            blocks
                .entry(&triple.subject)
                .or_default()
                .entry(&triple.predicate)
                .or_default()
                .push(&triple.object);
        }

        for (subject, predicates) in blocks {
            out.push('\n');
            out.push_str(&format_iri(subject, namespaces));

            for (i, (predicate, objects)) in predicates.into_iter().enumerate() {
                if i == 0 {
                    out.push(' ');
                } else {
                    write!(out, " ;\n{INDENT}")?;
                }

                if predicate.as_str() == rdf::TYPE {
                    out.push('a');
                } else {
                    out.push_str(&format_iri(predicate, namespaces));
                }

                let objects: Vec<String> = objects
                    .into_iter()
                    .map(|o| format_object(o, namespaces))
                    .collect();
                write!(out, " {}", objects.join(", "))?;
            }
            out.push_str(" .\n");
        }

        Ok(out)
    }
}

fn format_iri(node: &NamedNode, namespaces: &NamespaceManager) -> String {
    namespaces
        .compact(node.as_str())
        .unwrap_or_else(|| format!("<{}>", node.as_str()))
}

fn format_object(object: &RdfObject, namespaces: &NamespaceManager) -> String {
    match object {
        RdfObject::NamedNode(n) => format_iri(n, namespaces),
        RdfObject::Literal(l) => format_literal(l, namespaces),
    }
}

fn format_literal(literal: &Literal, namespaces: &NamespaceManager) -> String {
    let quoted = quote(literal.value());
    if let Some(lang) = literal.language() {
        format!("{quoted}@{lang}")
    } else if let Some(datatype) = literal.datatype() {
        let datatype = namespaces
            .compact(datatype)
            .unwrap_or_else(|| format!("<{datatype}>"));
        format!("{quoted}^^{datatype}")
    } else {
        quoted
    }
}

/// Quote a string as a Turtle `STRING_LITERAL_QUOTE`
fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for ch in value.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04X}", c as u32);
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

pub(super) fn convert_triple(t: rio_api::model::Triple<'_>) -> ParseResult<Triple> {
    let subject = match t.subject {
        RioSubject::NamedNode(n) => NamedNode::new(n.iri)?,
        other => return Err(ParseError::Unsupported(other.to_string())),
    };
    let predicate = NamedNode::new(t.predicate.iri)?;
    let object: RdfObject = match t.object {
        RioTerm::NamedNode(n) => NamedNode::new(n.iri)?.into(),
        RioTerm::Literal(RioLiteral::Simple { value }) => Literal::new_simple_literal(value).into(),
        RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
            Literal::new_language_tagged_literal(value, language)?.into()
        }
        RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
            Literal::new_typed_literal(value, NamedNode::new(datatype.iri)?).into()
        }
        other => return Err(ParseError::Unsupported(other.to_string())),
    };
    Ok(Triple::new(subject, predicate, object))
}
