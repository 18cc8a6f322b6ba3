// crates/devdef-rs-xml/src/model/hardware.rs

//! Contains model structs describing names, buses and memory of the device.

use super::common::{TextElement, ValueAttribute};
use serde::{Deserialize, Serialize};

/// Represents `<other-accepted-names>` holding any number of `<other-accepted-name>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OtherAcceptedNames {
    #[serde(rename = "other-accepted-name", default)]
    pub names: Vec<TextElement>,
}

/// Represents `<programming-properties is-programmable="true"/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProgrammingProperties {
    #[serde(
        rename = "@is-programmable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_programmable: Option<String>,
}

/// Represents `<bus-systems-available can="2" ethernet="1"/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct BusSystemsAvailable {
    #[serde(rename = "@can", default, skip_serializing_if = "Option::is_none")]
    pub can: Option<String>, // xsd:unsignedByte
    #[serde(rename = "@ethernet", default, skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<String>, // xsd:unsignedByte
}

/// Represents `<can-bitrates-support>` holding any number of `<can-bitrate value="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CanBitratesSupport {
    #[serde(rename = "can-bitrate", default)]
    pub bitrates: Vec<ValueAttribute>,
}

/// Represents `<user-eeprom sizebytes="..."/>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UserEeprom {
    #[serde(rename = "@sizebytes", default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<String>, // xsd:unsignedInt
}

/// Represents `<memory>`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Memory {
    #[serde(rename = "user-eeprom", default, skip_serializing_if = "Option::is_none")]
    pub user_eeprom: Option<UserEeprom>,
}
