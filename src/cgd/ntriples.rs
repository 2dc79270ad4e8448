use std::collections::BTreeMap;
use std::io::{self, Write};

use flexstr::SharedStr as FlexStr;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::constants::*;
use crate::graph::{FeatureLocation, MemoryGraph, NodeKind};

const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

// characters that can't appear in an N-Triples IRI
const IRI_ESCAPE_SET: &AsciiSet = &CONTROLS
    .add(b' ').add(b'<').add(b'>').add(b'"').add(b'{').add(b'}')
    .add(b'|').add(b'\\').add(b'^').add(b'`');

/// Writes a `MemoryGraph` as N-Triples, expanding CURIEs with a prefix map.
pub struct NTriplesWriter<'a> {
    curie_map: &'a BTreeMap<FlexStr, FlexStr>,
}

fn escape_literal(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len() + 2);
    for c in literal.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// a blank node label for a location of a feature
fn location_node_id(feature_id: &str, which: &str) -> String {
    let local: String = feature_id.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("_:{}{}", local, which)
}

impl<'a> NTriplesWriter<'a> {
    pub fn new(curie_map: &'a BTreeMap<FlexStr, FlexStr>) -> NTriplesWriter<'a> {
        NTriplesWriter {
            curie_map,
        }
    }

    /// "GENO:0000408" -> "<http://purl.obolibrary.org/obo/GENO_0000408>"
    /// Blank nodes are returned unchanged.  A CURIE with an unknown prefix
    /// is used as an IRI as is.  Characters not allowed in IRIs are percent
    /// encoded.
    pub fn expand(&self, id: &str) -> String {
        if id.starts_with("_:") {
            return id.to_owned();
        }

        if let Some((prefix, local)) = id.split_once(':') {
            if let Some(base) = self.curie_map.get(prefix) {
                return format!("<{}{}>", base, utf8_percent_encode(local, IRI_ESCAPE_SET));
            }
        }

        format!("<{}>", utf8_percent_encode(id, IRI_ESCAPE_SET))
    }

    fn write_triple(&self, out: &mut dyn Write, subject: &str, predicate: &str,
                    object: &str) -> Result<(), io::Error> {
        writeln!(out, "{} {} {} .", self.expand(subject), self.expand(predicate),
                 self.expand(object))
    }

    fn write_literal(&self, out: &mut dyn Write, subject: &str, predicate: &str,
                     literal: &str) -> Result<(), io::Error> {
        writeln!(out, "{} {} \"{}\" .", self.expand(subject), self.expand(predicate),
                 escape_literal(literal))
    }

    fn write_location(&self, out: &mut dyn Write, feature_id: &str, predicate: &str,
                      which: &str, location: &FeatureLocation) -> Result<(), io::Error> {
        let position_id = location_node_id(feature_id, which);

        self.write_triple(out, feature_id, predicate, &position_id)?;
        self.write_triple(out, &position_id, RDF_TYPE, FALDO_EXACT_POSITION)?;
        writeln!(out, "{} {} \"{}\"^^<{}> .", position_id, self.expand(FALDO_POSITION),
                 location.position, XSD_INTEGER)?;
        self.write_triple(out, &position_id, FALDO_REFERENCE, &location.reference)
    }

    pub fn write(&self, graph: &MemoryGraph, out: &mut dyn Write) -> Result<(), io::Error> {
        for node in graph.nodes() {
            match node.kind {
                NodeKind::Class => {
                    self.write_triple(out, &node.id, RDF_TYPE, OWL_CLASS)?;
                },
                NodeKind::Individual => {
                    self.write_triple(out, &node.id, RDF_TYPE, OWL_NAMED_INDIVIDUAL)?;
                },
            }
            for type_id in &node.types {
                self.write_triple(out, &node.id, RDF_TYPE, type_id)?;
            }
            if let Some(ref label) = node.label {
                self.write_literal(out, &node.id, RDFS_LABEL, label)?;
            }
        }

        for (label, relation) in graph.object_properties() {
            self.write_triple(out, relation, RDF_TYPE, OWL_OBJECT_PROPERTY)?;
            self.write_literal(out, relation, RDFS_LABEL, label)?;
        }

        for triple in graph.triples() {
            self.write_triple(out, &triple.subject, &triple.predicate, &triple.object)?;
        }

        for feature in graph.features() {
            self.write_triple(out, &feature.id, RDF_TYPE, &feature.feature_type)?;
            self.write_literal(out, &feature.id, RDFS_LABEL, &feature.label)?;
            self.write_location(out, &feature.id, FALDO_BEGIN, "Begin", &feature.begin)?;
            self.write_location(out, &feature.id, FALDO_END, "End", &feature.end)?;
        }

        for association in graph.associations() {
            let id = &association.id;
            self.write_triple(out, id, RDF_TYPE, OBAN_ASSOCIATION)?;
            self.write_triple(out, id, OBAN_HAS_SUBJECT, &association.subject)?;
            self.write_triple(out, id, OBAN_HAS_PREDICATE, &association.relation)?;
            self.write_triple(out, id, OBAN_HAS_OBJECT, &association.object)?;
            self.write_triple(out, id, DC_SOURCE, &association.source)?;
            self.write_triple(out, id, HAS_EVIDENCE, &association.evidence)?;
        }

        Ok(())
    }
}
