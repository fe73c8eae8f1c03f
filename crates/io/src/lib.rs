// RDF graph I/O

pub mod error;
pub mod format;
pub mod rdf;

pub use error::IoError;
pub use format::{guess_format, RdfFormat};
pub use rdf::{load_graph, parse_graph, save_graph, write_graph};
