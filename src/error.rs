use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found \"{}\"", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse OSM XML in \"{}\": {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: serde_xml_rs::Error,
    },

    #[error("{element} {id} is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        id: String,
        attribute: &'static str,
    },

    #[error("Node {node} has an invalid {attribute} value {value:?}")]
    InvalidCoordinate {
        node: String,
        attribute: &'static str,
        value: String,
    },

    #[error("Way {way} references missing node {node}")]
    DanglingReference { way: String, node: String },

    #[error("Failed to write KML: {0}")]
    Kml(#[from] quick_xml::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
