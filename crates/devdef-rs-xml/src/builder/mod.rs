// crates/devdef-rs-xml/src/builder/mod.rs

//! Provides functionality to serialize a `DeviceDefinition` back into a device definition XML string.
//!
//! This module converts the public `types` back into the internal `model`
//! structs required by `quick-xml`. The output is always in the current format:
//! every element is written, including those Load treats as optional, and the
//! reset wait times are written as six discrete values.

mod protocols;

use crate::error::DevDefError;
use crate::model;
use crate::model::hardware::UserEeprom;
use crate::model::{
    BusSystemsAvailable, CanBitratesSupport, Memory, OtherAcceptedNames, ProgrammingProperties,
    TextElement, ValueAttribute,
};
use crate::parser::FILE_VERSION;
use core::fmt::Write;
use devdef_rs::types::DeviceDefinition;
use serde::Serialize;

/// Serializes a `DeviceDefinition` into a device definition XML string.
///
/// This is exactly what [`save_device_definition`](crate::save_device_definition)
/// writes to disk. The output only depends on the definition, so saving the same
/// definition twice produces identical bytes. `file_path` is not written.
///
/// # Errors
/// Returns a `DevDefError` if `quick-xml` fails to serialize the document.
pub fn save_device_definition_to_string(def: &DeviceDefinition) -> Result<String, DevDefError> {
    // 1. Convert the definition into the document model
    let document = build_document(def);

    // 2. Serialize to string
    let mut buffer = String::new();
    write!(
        &mut buffer,
        "{}",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n"
    )?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    document.serialize(serializer)?;
    Ok(buffer)
}

/// Constructs the internal document model from the definition.
fn build_document(def: &DeviceDefinition) -> model::DeviceDefinitionDocument {
    model::DeviceDefinitionDocument {
        file_version: Some(TextElement {
            value: format!("0x{:04X}", FILE_VERSION),
        }),
        device_name: Some(TextElement::from(def.device_name.as_str())),
        device_name_alias: Some(TextElement::from(def.device_name_alias.as_str())),
        other_accepted_names: Some(OtherAcceptedNames {
            names: def
                .other_accepted_names
                .iter()
                .map(|name| TextElement::from(name.as_str()))
                .collect(),
        }),
        device_description: Some(TextElement::from(def.device_description.as_str())),
        programming_properties: Some(ProgrammingProperties {
            is_programmable: Some(def.programming_support.to_string()),
        }),
        image: Some(TextElement {
            value: def.image_path.to_string_lossy().into_owned(),
        }),
        bus_systems_available: Some(BusSystemsAvailable {
            can: Some(def.num_can_buses.to_string()),
            ethernet: Some(def.num_ethernet_buses.to_string()),
        }),
        can_bitrates_support: Some(CanBitratesSupport {
            bitrates: def
                .supported_bitrates
                .iter()
                .map(ValueAttribute::new)
                .collect(),
        }),
        protocols_diagnostics: Some(protocols::build_model_diagnostic_protocols(
            &def.diagnostic_protocols,
        )),
        protocols_flashloader: Some(protocols::build_model_flashloader_protocols(
            &def.flashloader_protocols,
        )),
        memory: Some(Memory {
            user_eeprom: Some(UserEeprom {
                size_bytes: Some(def.user_eeprom_size_bytes.to_string()),
            }),
        }),
    }
}
