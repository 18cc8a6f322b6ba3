// crates/devdef-rs-xml/src/parser.rs

use crate::error::DevDefError;
use crate::filer::DeviceDefinitionFiler;
use crate::logging::{EventSink, LogSink};
use crate::model::DeviceDefinitionDocument;
use crate::resolver;
use core::num::ParseIntError;
use devdef_rs::DeviceDefinition;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

/// Tag of the document root.
pub const ROOT_ELEMENT: &str = "opensyde-device-definition";

/// Format version written to `<file-version>`.
pub const FILE_VERSION: u16 = 0x0001;

/// Parses a device definition document held in memory.
///
/// `source_path` is the path the document belongs to. Relative image references
/// are resolved against its directory and it is stored as the definition's
/// `file_path`. It does not have to exist.
///
/// Notes and errors go to the `log` facade.
///
/// # Errors
/// Returns a `DevDefError` if the text is not well-formed XML, the root is not
/// `<opensyde-device-definition>`, or a mandatory element or attribute is
/// missing or invalid.
pub fn load_device_definition_from_str(
    xml_content: &str,
    source_path: impl AsRef<Path>,
) -> Result<DeviceDefinition, DevDefError> {
    DeviceDefinitionFiler::new(&LogSink).load_from_str(xml_content, source_path)
}

/// Parsing logic shared by the string and file entry points.
pub(crate) fn parse_document(
    xml_content: &str,
    source_path: &Path,
    sink: &dyn EventSink,
) -> Result<DeviceDefinition, DevDefError> {
    // 1. Deserialize the raw XML string into our internal model.
    let document: DeviceDefinitionDocument = quick_xml::de::from_str(xml_content)?;

    // 2. The deserializer does not look at the root tag name, so check it here.
    match root_element_name(xml_content)? {
        Some(name) if name == ROOT_ELEMENT => {}
        Some(name) => return Err(DevDefError::UnexpectedRoot { found: name }),
        None => {
            return Err(DevDefError::MissingElement {
                element: ROOT_ELEMENT,
            });
        }
    }

    // 3. Walk the tree.
    resolver::resolve_device_definition(&document, source_path, sink)
}

/// Returns the tag name of the first element in the document.
fn root_element_name(xml_content: &str) -> Result<Option<String>, DevDefError> {
    let mut reader = Reader::from_str(xml_content);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.name().as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

// --- Helper Functions ---

/// Parses a "0x..." or "..." hex string into a u16.
pub(crate) fn parse_hex_u16(s: &str) -> Result<u16, ParseIntError> {
    let trimmed = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(trimmed, 16)
}
