//! Internal `serde` data structures that map directly to the device definition XML schema.
//!
//! These structs are annotated with `serde` attributes to facilitate parsing and
//! writing via `quick-xml`. Every element and attribute is optional at this level;
//! the resolver decides what is mandatory so that a missing construct can be
//! reported by name instead of as a generic deserializer error.
//! Attribute values are kept as raw strings for the same reason.

use serde::{Deserialize, Serialize};

pub mod common;
pub mod hardware;
pub mod protocols;

// Re-export key components for internal use
pub use common::{TextElement, ValueAttribute};
pub use hardware::{
    BusSystemsAvailable, CanBitratesSupport, Memory, OtherAcceptedNames, ProgrammingProperties,
};
pub use protocols::{DiagnosticProtocols, FlashloaderProtocols};

/// The root element of a device definition file.
///
/// Represents the `<opensyde-device-definition>` element. Child order follows the
/// order in which the elements are written.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename = "opensyde-device-definition")]
pub struct DeviceDefinitionDocument {
    #[serde(rename = "file-version", default, skip_serializing_if = "Option::is_none")]
    pub file_version: Option<TextElement>,

    #[serde(rename = "device-name", default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<TextElement>,

    #[serde(
        rename = "device-name-alias",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub device_name_alias: Option<TextElement>,

    #[serde(
        rename = "other-accepted-names",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub other_accepted_names: Option<OtherAcceptedNames>,

    #[serde(
        rename = "device-description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub device_description: Option<TextElement>,

    #[serde(
        rename = "programming-properties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub programming_properties: Option<ProgrammingProperties>,

    #[serde(rename = "image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<TextElement>,

    #[serde(
        rename = "bus-systems-available",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bus_systems_available: Option<BusSystemsAvailable>,

    #[serde(
        rename = "can-bitrates-support",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub can_bitrates_support: Option<CanBitratesSupport>,

    #[serde(
        rename = "protocols-diagnostics",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub protocols_diagnostics: Option<DiagnosticProtocols>,

    #[serde(
        rename = "protocols-flashloader",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub protocols_flashloader: Option<FlashloaderProtocols>,

    #[serde(rename = "memory", default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Memory>,
}
