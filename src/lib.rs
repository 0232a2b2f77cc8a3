pub mod batch;
pub mod error;
mod ffi;
pub mod index;
pub mod kml;
pub mod placemark;
pub mod structure;

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::NamedTempFile;
use tracing::info;

pub use batch::{BatchReport, InputSet};
pub use error::ConvertError;
use index::NodeIndex;
use kml::KmlDocument;
use structure::OsmFile;

pub const KML_SUFFIX: &str = ".kml";

static INIT: Once = Once::new();

fn initialize_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Builds the node index, then resolves every way into a placemark.
pub fn convert(osm: &OsmFile) -> Result<KmlDocument, ConvertError> {
    let index = NodeIndex::build(&osm.nodes)?;
    let placemarks = placemark::translate(&osm.ways, &index)?;
    Ok(KmlDocument::new(placemarks))
}

/// Converts an in-memory document; `origin` names it in errors.
pub fn convert_str(xml: &str, origin: &Path) -> Result<Vec<u8>, ConvertError> {
    let osm = structure::parse_xml(xml.as_bytes(), origin)?;
    convert(&osm)?.to_kml()
}

/// `<input>.kml`, next to the input.
pub fn output_path(xml_file: &Path) -> PathBuf {
    let mut path = OsString::from(xml_file.as_os_str());
    path.push(KML_SUFFIX);
    PathBuf::from(path)
}

/// Converts one file and returns the path of the written KML. Nothing is
/// written unless the whole document converts.
pub fn convert_file(xml_file: &Path) -> Result<PathBuf, ConvertError> {
    if !xml_file.exists() {
        return Err(ConvertError::NotFound(xml_file.to_path_buf()));
    }
    info!("Converting file {:?}", xml_file);
    let osm = structure::parse_xml_file(xml_file)?;
    let document = convert(&osm)?;
    let kml = document.to_kml()?;

    let kml_path = output_path(xml_file);
    write_atomically(&kml_path, &kml)?;
    info!(
        "Wrote {} placemark(s) to {:?}",
        document.placemarks.len(),
        kml_path
    );
    Ok(kml_path)
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| ConvertError::io(dir, e))?;
    file.write_all(contents)
        .map_err(|e| ConvertError::io(file.path(), e))?;
    file.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;
    Ok(())
}
