use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use crate::error::ConvertError;
use crate::placemark::Placemark;

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

pub struct KmlDocument {
    pub placemarks: Vec<Placemark>,
}

impl KmlDocument {
    pub fn new(placemarks: Vec<Placemark>) -> Self {
        Self { placemarks }
    }

    /// Serializes the document with a fixed two-space indent.
    pub fn to_kml(&self) -> Result<Vec<u8>, ConvertError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer
            .create_element("kml")
            .with_attribute(("xmlns", KML_NAMESPACE))
            .write_inner_content(|writer| {
                writer
                    .create_element("Document")
                    .write_inner_content(|writer| {
                        for placemark in &self.placemarks {
                            Self::write_placemark(writer, placemark)?;
                        }
                        Ok::<(), quick_xml::Error>(())
                    })?;
                Ok::<(), quick_xml::Error>(())
            })?;
        Ok(writer.into_inner())
    }

    fn write_placemark(
        writer: &mut Writer<Vec<u8>>,
        placemark: &Placemark,
    ) -> quick_xml::Result<()> {
        let coordinates = placemark.coordinates_text();
        writer
            .create_element("Placemark")
            .write_inner_content(|writer| {
                writer
                    .create_element("name")
                    .write_text_content(BytesText::new(&placemark.name))?;
                writer
                    .create_element("LineString")
                    .write_inner_content(|writer| {
                        writer
                            .create_element("coordinates")
                            .write_text_content(BytesText::new(&coordinates))?;
                        Ok::<(), quick_xml::Error>(())
                    })?;
                Ok::<(), quick_xml::Error>(())
            })?;
        Ok(())
    }
}
