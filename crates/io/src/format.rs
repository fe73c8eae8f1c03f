use std::path::Path;

use crate::error::IoError;

/// Serialization formats that can be read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    Turtle,
    NTriples,
    NQuads,
    TriG,
    N3,
    RdfXml,
}

impl RdfFormat {
    pub const ALL: [RdfFormat; 6] = [
        Self::Turtle,
        Self::NTriples,
        Self::NQuads,
        Self::TriG,
        Self::N3,
        Self::RdfXml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Turtle => "turtle",
            Self::NTriples => "ntriples",
            Self::NQuads => "nquads",
            Self::TriG => "trig",
            Self::N3 => "n3",
            Self::RdfXml => "rdfxml",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Turtle => "text/turtle",
            Self::NTriples => "application/n-triples",
            Self::NQuads => "application/n-quads",
            Self::TriG => "application/trig",
            Self::N3 => "text/n3",
            Self::RdfXml => "application/rdf+xml",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Turtle => &["ttl", "turtle"],
            Self::NTriples => &["nt", "ntriples"],
            Self::NQuads => &["nq", "nquads"],
            Self::TriG => &["trig"],
            Self::N3 => &["n3"],
            Self::RdfXml => &["rdf", "owl", "xml"],
        }
    }

    /// Formats whose documents can carry named graphs (or N3 formulas).
    pub fn is_quad_format(&self) -> bool {
        matches!(self, Self::NQuads | Self::TriG | Self::N3)
    }

    /// Parse a user-supplied format name (`--left-format turtle`).
    pub fn from_name(name: &str) -> Result<Self, IoError> {
        match name.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(Self::NTriples),
            "nquads" | "n-quads" | "nq" => Ok(Self::NQuads),
            "trig" => Ok(Self::TriG),
            "n3" | "notation3" => Ok(Self::N3),
            "rdfxml" | "rdf/xml" | "xml" => Ok(Self::RdfXml),
            other => Err(IoError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the format from a file extension.
pub fn guess_format(path: &Path) -> Result<RdfFormat, IoError> {
    let ext = path.extension().and_then(|e| e.to_str());
    ext.and_then(RdfFormat::from_extension).ok_or_else(|| {
        IoError::UnsupportedFormat(format!(
            "cannot infer format from extension {:?} of {}",
            ext.unwrap_or("(none)"),
            path.display()
        ))
    })
}
