use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    /// File could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Syntax error in the input document.
    #[error("cannot parse {source_name}: {message}")]
    Parse { source_name: String, message: String },
    /// Extension or format name not recognized.
    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),
    /// A graph term cannot be expressed in RDF (bad IRI, bad blank node id, bad tag).
    #[error("invalid term '{term}': {message}")]
    InvalidTerm { term: String, message: String },
    /// The serializer failed writing to its sink.
    #[error("serialization failed: {0}")]
    Serialize(#[source] std::io::Error),
    /// Serialization or file replacement failed.
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
