use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_xml_rs::Deserializer;
use tracing::debug;

use crate::error::ConvertError;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename = "osm")]
pub struct OsmFile {
    #[serde(rename = "node", default)]
    pub nodes: Vec<OsmNode>,
    #[serde(rename = "way", default)]
    pub ways: Vec<OsmWay>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OsmNode {
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "lat")]
    pub lat: Option<String>,
    #[serde(rename = "lon")]
    pub lon: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OsmWay {
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "nd", default)]
    pub refs: Vec<NodeRef>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NodeRef {
    #[serde(rename = "ref")]
    pub node: String,
}

/// Parses an OSM document read from `origin`. Nodes and ways may be
/// interleaved in any order, and `<nd>` children may be interleaved with
/// `<tag>` children.
pub fn parse_xml<R: Read>(reader: R, origin: &Path) -> Result<OsmFile, ConvertError> {
    let mut deserializer =
        Deserializer::new_from_reader(reader).non_contiguous_seq_elements(true);
    let osm_file =
        OsmFile::deserialize(&mut deserializer).map_err(|source| ConvertError::Xml {
            path: origin.to_path_buf(),
            source,
        })?;
    debug!(
        "Parsed {} node(s) and {} way(s)",
        osm_file.nodes.len(),
        osm_file.ways.len()
    );
    Ok(osm_file)
}

pub fn parse_xml_file(path: &Path) -> Result<OsmFile, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    parse_xml(BufReader::new(file), path)
}
