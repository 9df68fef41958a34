//! N-Triples format implementation

use super::turtle::convert_triple;
use super::{ParseResult, SerializeError, SerializeResult};
use crate::rdf::{Graph, RdfObject, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::model::{
    Literal as RioLiteral, NamedNode as RioNamedNode, Subject as RioSubject, Term as RioTerm,
    Triple as RioTriple,
};
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, NTriplesParser};
use std::io::Cursor;

/// N-Triples parser
pub struct NTriplesParserWrapper;

impl NTriplesParserWrapper {
    /// Parse an N-Triples document into a graph
    pub fn parse(input: &str) -> ParseResult<Graph> {
        let mut parser = NTriplesParser::new(Cursor::new(input));
        let mut graph = Graph::new();

        parser.parse_all(&mut |t| -> ParseResult<()> {
            graph.insert(convert_triple(t)?);
            Ok(())
        })?;

        Ok(graph)
    }
}

/// N-Triples serializer
pub struct NTriplesSerializerWrapper;

impl NTriplesSerializerWrapper {
    /// Serialize a graph to an N-Triples string, one triple per line
    pub fn serialize(graph: &Graph) -> SerializeResult<String> {
        let mut output = Vec::new();
        {
            let mut formatter = NTriplesFormatter::new(&mut output);
            for triple in graph {
                formatter.format(&to_rio(triple))?;
            }
        }

        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}

fn to_rio(triple: &Triple) -> RioTriple<'_> {
    let object = match &triple.object {
        RdfObject::NamedNode(n) => RioTerm::NamedNode(RioNamedNode { iri: n.as_str() }),
        RdfObject::Literal(l) => RioTerm::Literal(match (l.language(), l.datatype()) {
            (Some(language), _) => RioLiteral::LanguageTaggedString {
                value: l.value(),
                language,
            },
            (None, Some(datatype)) => RioLiteral::Typed {
                value: l.value(),
                datatype: RioNamedNode { iri: datatype },
            },
            (None, None) => RioLiteral::Simple { value: l.value() },
        }),
    };

    RioTriple {
        subject: RioSubject::NamedNode(RioNamedNode {
            iri: triple.subject.as_str(),
        }),
        predicate: RioNamedNode {
            iri: triple.predicate.as_str(),
        },
        object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::vocab::skos;
    use crate::rdf::{Literal, NamedNode};

    #[test]
    fn test_one_line_per_triple() {
        let a = NamedNode::new("https://ex.org/v#A").unwrap();
        let b = NamedNode::new("https://ex.org/v#B").unwrap();
        let mut graph = Graph::new();
        graph.add(&b, &NamedNode::new(skos::BROADER).unwrap(), a.clone());
        graph.add(
            &a,
            &NamedNode::new(skos::PREF_LABEL).unwrap(),
            Literal::new_language_tagged_literal("Animal", "en").unwrap(),
        );

        let output = NTriplesSerializerWrapper::serialize(&graph).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "<https://ex.org/v#B> <http://www.w3.org/2004/02/skos/core#broader> <https://ex.org/v#A> ."
        );
        assert_eq!(
            lines[1],
            "<https://ex.org/v#A> <http://www.w3.org/2004/02/skos/core#prefLabel> \"Animal\"@en ."
        );
    }

    #[test]
    fn test_parse() {
        let input = "<https://ex.org/v#A> <http://www.w3.org/2004/02/skos/core#prefLabel> \"Animal\"@en .\n";
        let graph = NTriplesParserWrapper::parse(input).unwrap();
        assert_eq!(graph.len(), 1);
    }
}
