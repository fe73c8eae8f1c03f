// RDF import/export between files and the engine's in-memory graph

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use oxrdf::{BlankNode, GraphNameRef, NamedNode, Subject, Term};
use oxrdfxml::{RdfXmlParser, RdfXmlSerializer};
use oxttl::n3::{N3Quad, N3Term};
use oxttl::{
    N3Parser, NQuadsParser, NQuadsSerializer, NTriplesParser, NTriplesSerializer, TriGParser,
    TriGSerializer, TurtleParser, TurtleSerializer,
};
use skosalign_align::{Graph, Literal, Object, Triple};
use tracing::{debug, info};

use crate::error::IoError;
use crate::format::RdfFormat;

const BLANK_PREFIX: &str = "_:";

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

pub fn load_graph(path: &Path, format: RdfFormat) -> Result<Graph, IoError> {
    let file = File::open(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(BufReader::new(file), format, &path.display().to_string())?;
    info!(
        path = %path.display(),
        %format,
        media_type = format.media_type(),
        triples = graph.len(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parse a whole document. Quad formats are flattened into one graph.
pub fn parse_graph<R: Read>(reader: R, format: RdfFormat, source_name: &str) -> Result<Graph, IoError> {
    let parse_err = |e: &dyn std::fmt::Display| IoError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    };

    let mut graph = Graph::new();
    // Statements read from a named graph or an N3 formula.
    let mut flattened = 0usize;
    match format {
        RdfFormat::Turtle => {
            for triple in TurtleParser::new().for_reader(reader) {
                graph.insert(from_ox_triple(triple.map_err(|e| parse_err(&e))?)?);
            }
        }
        RdfFormat::NTriples => {
            for triple in NTriplesParser::new().for_reader(reader) {
                graph.insert(from_ox_triple(triple.map_err(|e| parse_err(&e))?)?);
            }
        }
        RdfFormat::RdfXml => {
            for triple in RdfXmlParser::new().for_reader(reader) {
                graph.insert(from_ox_triple(triple.map_err(|e| parse_err(&e))?)?);
            }
        }
        RdfFormat::NQuads => {
            for quad in NQuadsParser::new().for_reader(reader) {
                let quad = quad.map_err(|e| parse_err(&e))?;
                flattened += usize::from(!quad.graph_name.is_default_graph());
                graph.insert(from_ox_parts(quad.subject, quad.predicate, quad.object)?);
            }
        }
        RdfFormat::TriG => {
            for quad in TriGParser::new().for_reader(reader) {
                let quad = quad.map_err(|e| parse_err(&e))?;
                flattened += usize::from(!quad.graph_name.is_default_graph());
                graph.insert(from_ox_parts(quad.subject, quad.predicate, quad.object)?);
            }
        }
        RdfFormat::N3 => {
            for quad in N3Parser::new().for_reader(reader) {
                let quad = quad.map_err(|e| parse_err(&e))?;
                flattened += usize::from(!quad.graph_name.is_default_graph());
                graph.insert(from_n3_quad(quad)?);
            }
        }
    }

    if format.is_quad_format() && flattened > 0 {
        info!(source = source_name, %format, flattened, "named graph statements merged into one graph");
    }
    Ok(graph)
}

/// N3 terms outside RDF (variables, literal subjects, non-IRI predicates)
/// have no place in the graph.
fn from_n3_quad(quad: N3Quad) -> Result<Triple, IoError> {
    let subject = match quad.subject {
        N3Term::NamedNode(node) => Subject::NamedNode(node),
        N3Term::BlankNode(node) => Subject::BlankNode(node),
        other => return Err(unsupported_n3(&other, "subject")),
    };
    let predicate = match quad.predicate {
        N3Term::NamedNode(node) => node,
        other => return Err(unsupported_n3(&other, "predicate")),
    };
    let object = match quad.object {
        N3Term::NamedNode(node) => Term::NamedNode(node),
        N3Term::BlankNode(node) => Term::BlankNode(node),
        N3Term::Literal(lit) => Term::Literal(lit),
        other => return Err(unsupported_n3(&other, "object")),
    };
    from_ox_parts(subject, predicate, object)
}

fn unsupported_n3(term: &N3Term, position: &str) -> IoError {
    IoError::InvalidTerm {
        term: term.to_string(),
        message: format!("not usable as an RDF {position}"),
    }
}

fn from_ox_triple(triple: oxrdf::Triple) -> Result<Triple, IoError> {
    from_ox_parts(triple.subject, triple.predicate, triple.object)
}

fn from_ox_parts(subject: Subject, predicate: NamedNode, object: Term) -> Result<Triple, IoError> {
    let subject = match subject {
        Subject::NamedNode(node) => node.into_string(),
        Subject::BlankNode(node) => format!("{BLANK_PREFIX}{}", node.as_str()),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::InvalidTerm {
                term: other.to_string(),
                message: "quoted triples are not supported".into(),
            })
        }
    };

    let object = match object {
        Term::NamedNode(node) => Object::Resource(node.into_string()),
        Term::BlankNode(node) => Object::Resource(format!("{BLANK_PREFIX}{}", node.as_str())),
        Term::Literal(lit) => Object::Literal(Literal {
            value: lit.value().to_string(),
            language: lit.language().map(str::to_string),
            datatype: if lit.is_plain() {
                None
            } else {
                Some(lit.datatype().as_str().to_string())
            },
        }),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::InvalidTerm {
                term: other.to_string(),
                message: "quoted triples are not supported".into(),
            })
        }
    };

    Ok(Triple {
        subject,
        predicate: predicate.into_string(),
        object,
    })
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

/// Serialize `graph` to `writer`. Every term is validated before the first
/// byte is written.
pub fn write_graph<W: Write>(graph: &Graph, writer: W, format: RdfFormat) -> Result<W, IoError> {
    let triples = to_ox_triples(graph)?;
    serialize(&triples, writer, format).map_err(IoError::Serialize)
}

/// Write `graph` to `path` atomically: serialize into a sibling temp file,
/// then rename over the target. On failure the temp file is removed and the
/// target is left untouched.
pub fn save_graph(graph: &Graph, path: &Path, format: RdfFormat) -> Result<(), IoError> {
    let triples = to_ox_triples(graph)?;
    let tmp_path = temp_path_for(path);

    let result = (|| -> std::io::Result<()> {
        let file = File::create(&tmp_path)?;
        let writer = serialize(&triples, BufWriter::new(file), format)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, path)
    })();

    if let Err(source) = result {
        if tmp_path.exists() {
            if let Err(e) = std::fs::remove_file(&tmp_path) {
                debug!(path = %tmp_path.display(), error = %e, "cannot remove temp file");
            }
        }
        return Err(IoError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        path = %path.display(),
        %format,
        media_type = format.media_type(),
        triples = triples.len(),
        "graph saved"
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn serialize<W: Write>(triples: &[oxrdf::Triple], writer: W, format: RdfFormat) -> std::io::Result<W> {
    let mut writer = match format {
        // Turtle is a subset of N3.
        RdfFormat::Turtle | RdfFormat::N3 => {
            let mut s = TurtleSerializer::new().for_writer(writer);
            for t in triples {
                s.serialize_triple(t)?;
            }
            s.finish()?
        }
        RdfFormat::NTriples => {
            let mut s = NTriplesSerializer::new().for_writer(writer);
            for t in triples {
                s.serialize_triple(t)?;
            }
            s.finish()
        }
        RdfFormat::RdfXml => {
            let mut s = RdfXmlSerializer::new().for_writer(writer);
            for t in triples {
                s.serialize_triple(t)?;
            }
            s.finish()?
        }
        RdfFormat::NQuads => {
            let mut s = NQuadsSerializer::new().for_writer(writer);
            for t in triples {
                s.serialize_quad(t.as_ref().in_graph(GraphNameRef::DefaultGraph))?;
            }
            s.finish()
        }
        RdfFormat::TriG => {
            let mut s = TriGSerializer::new().for_writer(writer);
            for t in triples {
                s.serialize_quad(t.as_ref().in_graph(GraphNameRef::DefaultGraph))?;
            }
            s.finish()?
        }
    };
    writer.flush()?;
    Ok(writer)
}

fn to_ox_triples(graph: &Graph) -> Result<Vec<oxrdf::Triple>, IoError> {
    graph.iter().map(to_ox_triple).collect()
}

fn to_ox_triple(triple: &Triple) -> Result<oxrdf::Triple, IoError> {
    let subject: Subject = match blank_id(&triple.subject) {
        Some(id) => blank_node(id)?.into(),
        None => named_node(&triple.subject)?.into(),
    };
    let predicate = named_node(&triple.predicate)?;
    let object: Term = match &triple.object {
        Object::Resource(id) => match blank_id(id) {
            Some(id) => blank_node(id)?.into(),
            None => named_node(id)?.into(),
        },
        Object::Literal(lit) => to_ox_literal(lit)?.into(),
    };
    Ok(oxrdf::Triple::new(subject, predicate, object))
}

fn to_ox_literal(lit: &Literal) -> Result<oxrdf::Literal, IoError> {
    match (lit.language.as_deref(), lit.datatype.as_deref()) {
        (Some(lang), _) if !lang.is_empty() => {
            oxrdf::Literal::new_language_tagged_literal(lit.value.as_str(), lang).map_err(|e| {
                IoError::InvalidTerm {
                    term: format!("\"{}\"@{lang}", lit.value),
                    message: e.to_string(),
                }
            })
        }
        (_, Some(datatype)) => Ok(oxrdf::Literal::new_typed_literal(
            lit.value.as_str(),
            named_node(datatype)?,
        )),
        _ => Ok(oxrdf::Literal::new_simple_literal(lit.value.as_str())),
    }
}

fn blank_id(id: &str) -> Option<&str> {
    id.strip_prefix(BLANK_PREFIX)
}

fn named_node(iri: &str) -> Result<NamedNode, IoError> {
    NamedNode::new(iri).map_err(|e| IoError::InvalidTerm {
        term: iri.to_string(),
        message: e.to_string(),
    })
}

fn blank_node(id: &str) -> Result<BlankNode, IoError> {
    BlankNode::new(id).map_err(|e| IoError::InvalidTerm {
        term: format!("{BLANK_PREFIX}{id}"),
        message: e.to_string(),
    })
}
