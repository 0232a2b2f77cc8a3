use std::collections::HashMap;

use tracing::debug;

use crate::error::ConvertError;
use crate::structure::OsmNode;

/// A node position, kept as the text found in the source document so that
/// it is written back out without any loss of precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coordinate {
    pub lat: String,
    pub lon: String,
}

/// Node positions keyed by the node's id token. Ids are compared verbatim,
/// so `"07"` and `"7"` are different nodes.
#[derive(Debug, Default)]
pub struct NodeIndex {
    nodes: HashMap<String, Coordinate>,
}

impl NodeIndex {
    pub fn build(nodes: &[OsmNode]) -> Result<Self, ConvertError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id.clone().ok_or_else(|| ConvertError::MissingAttribute {
                element: "Node",
                id: "<unknown>".to_string(),
                attribute: "id",
            })?;
            let lat = Self::coordinate(&id, "lat", node.lat.as_deref())?;
            let lon = Self::coordinate(&id, "lon", node.lon.as_deref())?;
            index.insert(id, Coordinate { lat, lon });
        }
        debug!("Indexed {} node(s)", index.len());
        Ok(Self { nodes: index })
    }

    pub fn get(&self, id: &str) -> Option<&Coordinate> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn coordinate(
        node: &str,
        attribute: &'static str,
        value: Option<&str>,
    ) -> Result<String, ConvertError> {
        let value = value.ok_or_else(|| ConvertError::MissingAttribute {
            element: "Node",
            id: node.to_string(),
            attribute,
        })?;
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(value.to_string()),
            _ => Err(ConvertError::InvalidCoordinate {
                node: node.to_string(),
                attribute,
                value: value.to_string(),
            }),
        }
    }
}
