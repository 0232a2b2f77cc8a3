use std::fmt::Write;

use tracing::debug;

use crate::{
    error::ConvertError,
    index::{Coordinate, NodeIndex},
    structure::OsmWay,
};

/// A way resolved into line geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placemark {
    pub name: String,
    pub coordinates: Vec<Coordinate>,
}

impl Placemark {
    pub fn new(way: &OsmWay, index: &NodeIndex) -> Result<Self, ConvertError> {
        let id = way
            .id
            .as_deref()
            .ok_or_else(|| ConvertError::MissingAttribute {
                element: "Way",
                id: "<unknown>".to_string(),
                attribute: "id",
            })?;

        let coordinates = way
            .refs
            .iter()
            .map(|node_ref| {
                index
                    .get(&node_ref.node)
                    .cloned()
                    .ok_or_else(|| ConvertError::DanglingReference {
                        way: id.to_string(),
                        node: node_ref.node.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: format!("Way {id}"),
            coordinates,
        })
    }

    /// KML `<coordinates>` body: `lon,lat,0` per vertex, each followed by a space.
    pub fn coordinates_text(&self) -> String {
        let mut text = String::new();
        for coordinate in &self.coordinates {
            // Writing into a String cannot fail.
            let _ = write!(text, "{},{},0 ", coordinate.lon, coordinate.lat);
        }
        text
    }
}

/// Resolves every way against the index, keeping document order.
pub fn translate(ways: &[OsmWay], index: &NodeIndex) -> Result<Vec<Placemark>, ConvertError> {
    let placemarks = ways
        .iter()
        .map(|way| Placemark::new(way, index))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Translated {} way(s)", placemarks.len());
    Ok(placemarks)
}
